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
    message_page, non_empty, AppState, Error,
};
use crate::{render, view};

/// Venue fields as submitted by the create and edit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Genres,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueInput {
    pub fn parse(form: &FormData) -> Result<Self, Error> {
        Ok(VenueInput {
            name: form.require("name")?.trim().to_string(),
            city: non_empty(form.require("city")?),
            state: non_empty(form.require("state")?),
            address: non_empty(form.require("address")?),
            phone: non_empty(form.require("phone")?),
            image_link: form.get("image_link").and_then(non_empty),
            facebook_link: form.get("facebook_link").and_then(non_empty),
            genres: form.get_all("genres").into_iter().collect(),
            website: form.get("website_link").and_then(non_empty),
            seeking_talent: form.contains("seeking_talent"),
            seeking_description: form.get("seeking_description").and_then(non_empty),
        })
    }

    fn into_active(self, id: ActiveValue<i32>) -> entity::VenueActive {
        entity::VenueActive {
            id,
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            image_link: ActiveValue::Set(self.image_link),
            facebook_link: ActiveValue::Set(self.facebook_link),
            genres: ActiveValue::Set(Some(self.genres.encode())),
            website: ActiveValue::Set(self.website),
            seeking_talent: ActiveValue::Set(self.seeking_talent),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
    }
}

async fn find_venue<C>(db: &C, id: i32) -> Result<entity::Venue, Error>
where
    C: ConnectionTrait,
{
    entity::VenueEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Venue not found");
            Error::NotFound
        })
}

pub async fn venues(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let tx = state.db.begin().await?;
    let venues = entity::VenueEntity::find()
        .order_by_asc(entity::VenueColumn::Id)
        .all(&tx)
        .await?;
    let shows = venues.load_many(entity::ShowEntity, &tx).await?;
    let areas = view::areas(venues.into_iter().zip(shows).collect(), view::now());
    Ok(render::venue_list(&areas))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form,
) -> Result<Html<String>, Error> {
    let term = form.get("search_term").unwrap_or_default().to_string();
    let results = search(&state, &term).await.map_err(|e| {
        tracing::error!(error = %e, %term, "Venue search failed");
        Error::Unprocessable("venue search".to_string())
    })?;
    Ok(render::venue_search(&term, &results))
}

async fn search(state: &AppState, term: &str) -> Result<view::SearchResults, DbErr> {
    let tx = state.db.begin().await?;
    let venues: Vec<_> = entity::VenueEntity::find()
        .order_by_asc(entity::VenueColumn::Id)
        .all(&tx)
        .await?
        .into_iter()
        .filter(|row| view::name_matches(&row.name, term))
        .collect();
    let shows = venues.load_many(entity::ShowEntity, &tx).await?;
    Ok(view::search_results(
        venues
            .into_iter()
            .zip(shows)
            .map(|(venue, shows)| (venue.id, venue.name, shows)),
        view::now(),
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    flash: Flash,
) -> Result<Response, Error> {
    let tx = state.db.begin().await?;
    let venue = find_venue(&tx, id).await?;
    let shows = entity::ShowEntity::find()
        .filter(entity::ShowColumn::VenueId.eq(id))
        .order_by_asc(entity::ShowColumn::Id)
        .all(&tx)
        .await?;
    let artists = shows.load_one(entity::ArtistEntity, &tx).await?;
    let shows = shows
        .into_iter()
        .zip(artists)
        .filter_map(|(show, artist)| artist.map(|a| (show, a)))
        .collect();

    let detail = view::venue_detail(venue, shows, view::now());
    let page = render::venue_detail(flash.message(), &detail);
    Ok(flash.respond(page))
}

pub async fn create_venue_form() -> Html<String> {
    render::venue_form(None, None)
}

async fn insert(state: &AppState, input: VenueInput) -> Result<entity::Venue, DbErr> {
    let tx = state.db.begin().await?;
    let venue = input.into_active(ActiveValue::NotSet).insert(&tx).await?;
    tx.commit().await?;
    Ok(venue)
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form,
) -> Result<Html<String>, Error> {
    let input = VenueInput::parse(&form)?;
    let name = input.name.clone();
    let message = match insert(&state, input).await {
        Ok(venue) => {
            tracing::info!(id = venue.id, %name, "Venue listed");
            format!("Venue {} was successfully listed!", name)
        }
        Err(e) => {
            tracing::error!(error = %Error::from(e), %name, "Could not list venue");
            format!("An error occurred. Venue {} could not be listed.", name)
        }
    };
    Ok(message_page(&message))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, Error> {
    let tx = state.db.begin().await?;
    find_venue(&tx, id).await?;
    let deleted = match entity::VenueEntity::delete_by_id(id).exec(&tx).await {
        Ok(_) => tx.commit().await,
        Err(e) => Err(e),
    };
    if let Err(e) = deleted {
        tracing::error!(error = %Error::from(e), id, "Could not delete venue");
        return Err(Error::Unprocessable("venue delete".to_string()));
    }
    Ok(message_page("Venue was successfully deleted."))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, Error> {
    let tx = state.db.begin().await?;
    let venue = find_venue(&tx, id).await?;
    Ok(render::venue_form(Some(&venue), None))
}

async fn update(state: &AppState, id: i32, input: VenueInput) -> Result<(), DbErr> {
    let tx = state.db.begin().await?;
    input.into_active(ActiveValue::Unchanged(id)).update(&tx).await?;
    tx.commit().await
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form,
) -> Result<Response, Error> {
    find_venue(&state.db, id).await?;
    let input = VenueInput::parse(&form)?;
    let name = input.name.clone();
    let message = match update(&state, id, input).await {
        Ok(()) => format!("{} was successfully updated!", name),
        Err(e) => {
            tracing::error!(error = %Error::from(e), id, "Could not update venue");
            format!("An error occurred. Venue {} could not be updated.", name)
        }
    };
    Ok((
        [(SET_COOKIE, state.flash.cookie(&message))],
        Redirect::to(&format!("/venues/{}", id)),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(body: &str) -> FormData {
        FormData::parse(body.as_bytes()).unwrap()
    }

    #[test]
    fn unchecked_checkbox_means_not_seeking() {
        let input = VenueInput::parse(&form(
            "name=The+Hop&city=SF&state=CA&address=1015+Folsom&phone=123",
        ))
        .unwrap();
        assert!(!input.seeking_talent);
        assert!(input.genres.is_empty());
        assert_eq!(input.website, None);
    }

    #[test]
    fn multi_valued_genres_and_empty_optionals() {
        let input = VenueInput::parse(&form(
            "name=The+Hop&city=SF&state=CA&address=1015+Folsom&phone=&genres=Jazz&genres=Rock&seeking_talent=y&website_link=",
        ))
        .unwrap();
        assert!(input.seeking_talent);
        assert_eq!(input.genres.encode(), "Jazz,Rock");
        assert_eq!(input.phone, None);
        assert_eq!(input.website, None);
    }

    #[test]
    fn address_is_required() {
        let err = VenueInput::parse(&form("name=The+Hop&city=SF&state=CA&phone=1")).unwrap_err();
        assert!(matches!(err, Error::BadRequest(field) if field.contains("address")));
    }
}
