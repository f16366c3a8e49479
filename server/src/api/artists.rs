use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Redirect, Response},
};
use entity::Genres;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use super::{
    extract::{Form, FormData, Path},
    flash::Flash,
    non_empty, AppState, Error,
};
use crate::{render, view};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistInput {
    pub fn parse(form: &FormData) -> Result<Self, Error> {
        Ok(ArtistInput {
            name: form.require("name")?.trim().to_string(),
            city: non_empty(form.require("city")?),
            state: non_empty(form.require("state")?),
            phone: non_empty(form.require("phone")?),
            genres: form.get_all("genres").into_iter().collect(),
            image_link: form.get("image_link").and_then(non_empty),
            facebook_link: form.get("facebook_link").and_then(non_empty),
            website_link: form.get("website_link").and_then(non_empty),
            seeking_venue: form.contains("seeking_venue"),
            seeking_description: form.get("seeking_description").and_then(non_empty),
        })
    }

    fn into_active(self, id: ActiveValue<i32>) -> entity::ArtistActive {
        entity::ArtistActive {
            id,
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            phone: ActiveValue::Set(self.phone),
            genres: ActiveValue::Set(Some(self.genres.encode())),
            image_link: ActiveValue::Set(self.image_link),
            facebook_link: ActiveValue::Set(self.facebook_link),
            website_link: ActiveValue::Set(self.website_link),
            seeking_venue: ActiveValue::Set(self.seeking_venue),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
    }
}

async fn find_artist<C>(db: &C, id: i32) -> Result<entity::Artist, Error>
where
    C: ConnectionTrait,
{
    entity::ArtistEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Artist not found");
            Error::NotFound
        })
}

pub async fn artists(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let tx = state.db.begin().await?;
    let artists = entity::ArtistEntity::find()
        .order_by_asc(entity::ArtistColumn::Id)
        .all(&tx)
        .await?
        .into_iter()
        .map(|a| view::ArtistListing {
            id: a.id,
            name: a.name,
        })
        .collect::<Vec<_>>();
    Ok(render::artist_list(&artists))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form,
) -> Result<Html<String>, Error> {
    let term = form.get("search_term").unwrap_or_default().to_string();
    let results = search(&state, &term).await.map_err(|e| {
        tracing::error!(error = %e, %term, "Artist search failed");
        Error::Unprocessable("artist search".to_string())
    })?;
    Ok(render::artist_search(&term, &results))
}

async fn search(state: &AppState, term: &str) -> Result<view::SearchResults, DbErr> {
    let tx = state.db.begin().await?;
    let artists: Vec<_> = entity::ArtistEntity::find()
        .order_by_asc(entity::ArtistColumn::Id)
        .all(&tx)
        .await?
        .into_iter()
        .filter(|row| view::name_matches(&row.name, term))
        .collect();
    let shows = artists.load_many(entity::ShowEntity, &tx).await?;
    Ok(view::search_results(
        artists
            .into_iter()
            .zip(shows)
            .map(|(artist, shows)| (artist.id, artist.name, shows)),
        view::now(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    flash: Flash,
) -> Result<Response, Error> {
    let tx = state.db.begin().await?;
    let artist = find_artist(&tx, id).await?;
    let shows = entity::ShowEntity::find()
        .filter(entity::ShowColumn::ArtistId.eq(id))
        .order_by_asc(entity::ShowColumn::Id)
        .all(&tx)
        .await?;
    let venues = shows.load_one(entity::VenueEntity, &tx).await?;
    let shows = shows
        .into_iter()
        .zip(venues)
        .filter_map(|(show, venue)| venue.map(|v| (show, v)))
        .collect();

    let detail = view::artist_detail(artist, shows, view::now());
    let page = render::artist_detail(flash.message(), &detail);
    Ok(flash.respond(page))
}

pub async fn create_artist_form() -> Html<String> {
    render::artist_form(None, None)
}

async fn insert(state: &AppState, input: ArtistInput) -> Result<entity::Artist, DbErr> {
    let tx = state.db.begin().await?;
    let artist = input.into_active(ActiveValue::NotSet).insert(&tx).await?;
    tx.commit().await?;
    Ok(artist)
}

/// Both outcomes render the blank artist form again, carrying the message.
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form,
) -> Result<Html<String>, Error> {
    let input = ArtistInput::parse(&form)?;
    let name = input.name.clone();
    let message = match insert(&state, input).await {
        Ok(artist) => {
            tracing::info!(id = artist.id, %name, "Artist listed");
            format!("{} was successfully added!", name)
        }
        Err(e) => {
            tracing::error!(error = %Error::from(e), %name, "Could not list artist");
            format!("An error occurred. {} could not be added!", name)
        }
    };
    Ok(render::artist_form(None, Some(&message)))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, Error> {
    let tx = state.db.begin().await?;
    let artist = find_artist(&tx, id).await?;
    Ok(render::artist_form(Some(&artist), None))
}

async fn update(state: &AppState, id: i32, input: ArtistInput) -> Result<(), DbErr> {
    let tx = state.db.begin().await?;
    input.into_active(ActiveValue::Unchanged(id)).update(&tx).await?;
    tx.commit().await
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form,
) -> Result<Response, Error> {
    find_artist(&state.db, id).await?;
    let input = ArtistInput::parse(&form)?;
    let name = input.name.clone();
    let message = match update(&state, id, input).await {
        Ok(()) => format!("{} was successfully updated!", name),
        Err(e) => {
            tracing::error!(error = %Error::from(e), id, "Could not update artist");
            format!("An error occurred. {} could not be updated.", name)
        }
    };
    Ok((
        [(SET_COOKIE, state.flash.cookie(&message))],
        Redirect::to(&format!("/artists/{}", id)),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeking_venue_follows_checkbox_presence() {
        let form = FormData::parse(
            b"name=Guns+N+Petals&city=San+Francisco&state=CA&phone=326-123-5000&seeking_venue=y&genres=Rock+n+Roll",
        )
        .unwrap();
        let input = ArtistInput::parse(&form).unwrap();
        assert!(input.seeking_venue);
        assert_eq!(input.genres.encode(), "Rock n Roll");
        assert_eq!(input.city.as_deref(), Some("San Francisco"));
    }

    #[test]
    fn name_is_required() {
        let form = FormData::parse(b"city=SF&state=CA&phone=1").unwrap();
        assert!(matches!(
            ArtistInput::parse(&form),
            Err(Error::BadRequest(_))
        ));
    }
}
