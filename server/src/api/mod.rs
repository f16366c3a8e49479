mod artists;
pub mod error;
pub mod extract;
pub mod flash;
mod shows;
mod venues;

use axum::{
    extract::FromRef,
    response::{Html, Response},
    routing::{get, post},
    Router,
};
pub use error::Error;
use sea_orm::DbConn;
use tower_http::trace::TraceLayer;

use crate::render;
use flash::{Flash, FlashKey};

#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub flash: FlashKey,
}

impl FromRef<AppState> for FlashKey {
    fn from_ref(state: &AppState) -> Self {
        state.flash.clone()
    }
}

pub fn router(db: DbConn, secret_key: &str) -> Router {
    let tracing = TraceLayer::new_for_http();
    Router::new()
        .route("/", get(index))
        .route("/venues", get(venues::venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route("/venues/:id", get(venues::show_venue))
        .route("/venues/:id/delete", post(venues::delete_venue))
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue).post(venues::edit_venue_submission),
        )
        .route("/artists", get(artists::artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:id", get(artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist).post(artists::edit_artist_submission),
        )
        .route("/shows", get(shows::shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
        .fallback(not_found)
        .layer(tracing)
        .with_state(AppState {
            db,
            flash: FlashKey::new(secret_key),
        })
}

async fn index(flash: Flash) -> Response {
    let page = render::home(flash.message());
    flash.respond(page)
}

async fn not_found() -> Error {
    Error::NotFound
}

/// Empty inputs are stored as missing values.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn message_page(message: &str) -> Html<String> {
    render::home(Some(message))
}
