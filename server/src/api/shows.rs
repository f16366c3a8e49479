use axum::{extract::State, response::Html};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, LoaderTrait, QueryOrder, TransactionTrait};
use thiserror::Error as ThisError;
use time::PrimitiveDateTime;

use super::{
    extract::{Form, FormData},
    message_page, AppState, Error,
};
use crate::{render, view};

#[derive(ThisError, Debug)]
enum ListingError {
    #[error("Invalid {0}: {1}")]
    Invalid(&'static str, String),
    #[error("No {0} with id {1}")]
    Missing(&'static str, i32),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

pub struct ShowInput {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowInput {
    pub fn parse(form: &FormData) -> Result<Self, Error> {
        Ok(ShowInput {
            artist_id: form.require("artist_id")?.trim().to_string(),
            venue_id: form.require("venue_id")?.trim().to_string(),
            start_time: form.require("start_time")?.to_string(),
        })
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<i32, ListingError> {
    value
        .parse()
        .map_err(|_| ListingError::Invalid(field, value.to_string()))
}

fn parse_time(value: &str) -> Result<PrimitiveDateTime, ListingError> {
    view::parse_start_time(value).ok_or_else(|| ListingError::Invalid("start_time", value.to_string()))
}

pub async fn shows(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let tx = state.db.begin().await?;
    let shows = entity::ShowEntity::find()
        .order_by_asc(entity::ShowColumn::StartTime)
        .order_by_asc(entity::ShowColumn::Id)
        .all(&tx)
        .await?;
    let venues = shows.load_one(entity::VenueEntity, &tx).await?;
    let artists = shows.load_one(entity::ArtistEntity, &tx).await?;
    let listings = shows
        .into_iter()
        .zip(venues)
        .zip(artists)
        .filter_map(|((show, venue), artist)| Some(view::ShowListing::new(show, venue?, artist?)))
        .collect::<Vec<_>>();
    Ok(render::show_list(&listings))
}

pub async fn create_show_form() -> Html<String> {
    render::show_form()
}

async fn insert(state: &AppState, input: &ShowInput) -> Result<entity::Show, ListingError> {
    let artist_id = parse_id("artist_id", &input.artist_id)?;
    let venue_id = parse_id("venue_id", &input.venue_id)?;
    let start_time = parse_time(&input.start_time)?;

    let tx = state.db.begin().await?;
    entity::ArtistEntity::find_by_id(artist_id)
        .one(&tx)
        .await?
        .ok_or(ListingError::Missing("artist", artist_id))?;
    entity::VenueEntity::find_by_id(venue_id)
        .one(&tx)
        .await?
        .ok_or(ListingError::Missing("venue", venue_id))?;

    let show = entity::ShowActive {
        id: ActiveValue::NotSet,
        artist_id: ActiveValue::Set(artist_id),
        venue_id: ActiveValue::Set(venue_id),
        start_time: ActiveValue::Set(Some(start_time)),
    }
    .insert(&tx)
    .await?;
    tx.commit().await?;
    Ok(show)
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form,
) -> Result<Html<String>, Error> {
    let input = ShowInput::parse(&form)?;
    let message = match insert(&state, &input).await {
        Ok(show) => {
            tracing::info!(id = show.id, "Show listed");
            "Show was successfully listed!"
        }
        Err(ListingError::Database(e)) => {
            tracing::error!(error = %Error::from(e), "Could not list show");
            "An error occurred. Show could not be listed."
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not list show");
            "An error occurred. Show could not be listed."
        }
    };
    Ok(message_page(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_numeric() {
        assert!(matches!(
            parse_id("artist_id", "four"),
            Err(ListingError::Invalid("artist_id", _))
        ));
        assert_eq!(parse_id("venue_id", "12").unwrap(), 12);
    }

    #[test]
    fn start_time_must_parse() {
        assert!(parse_time("2035-04-01 20:00:00").is_ok());
        assert!(matches!(
            parse_time("next friday"),
            Err(ListingError::Invalid("start_time", _))
        ));
    }
}
