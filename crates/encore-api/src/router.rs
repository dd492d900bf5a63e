//! Axum router construction for the booking API.
//!
//! Assembles all venue, artist, and show routes into a single [`Router`]
//! with CORS middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{artists, shows, venues};

/// Build the complete Axum router for the booking API.
///
/// The router includes:
/// - `GET /venues` -- venues grouped by (city, state)
/// - `POST /venues/search` -- partial-name search
/// - `GET /venues/{id}` -- detail with past/upcoming shows
/// - `POST /venues/create` -- create
/// - `GET|POST /venues/{id}/edit` -- edit
/// - `DELETE /venues/{id}` -- delete
/// - the artist analogues under `/artists`
/// - `GET /shows` and `POST /shows/create`
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route("/venues/create", post(venues::create_venue))
        .route(
            "/venues/{id}",
            get(venues::get_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(venues::edit_venue_form).post(venues::edit_venue),
        )
        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route("/artists/create", post(artists::create_artist))
        .route("/artists/{id}", get(artists::get_artist))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_artist_form).post(artists::edit_artist),
        )
        // Shows
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", post(shows::create_show))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
