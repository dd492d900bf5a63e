//! Venue endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/venues` | Venues grouped by (city, state) |
//! | `POST` | `/venues/search` | Case-insensitive partial-name search |
//! | `GET` | `/venues/{id}` | Detail with past/upcoming shows |
//! | `POST` | `/venues/create` | List a new venue |
//! | `GET` | `/venues/{id}/edit` | Current record backing the edit form |
//! | `POST` | `/venues/{id}/edit` | Apply an edit |
//! | `DELETE` | `/venues/{id}` | Remove a venue (and its shows) |
//!
//! Each detail request snapshots `Utc::now()` exactly once and threads it
//! through the store, so the past/upcoming partition is computed against
//! a single consistent clock.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use chrono::Utc;
use encore_db::venue_store::{VenueRow, VenueStore};
use encore_types::{Genres, NewVenue, VenueId, VenueUpdate};

use crate::error::ApiError;
use crate::forms::{parse_uuid, SearchForm};
use crate::state::AppState;

/// List all venues grouped by exact (city, state) pair.
pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let areas = VenueStore::new(state.db.pool())
        .list_grouped_by_area()
        .await?;

    Ok(Json(serde_json::json!({
        "count": areas.len(),
        "areas": areas,
    })))
}

/// Search venues by case-insensitive partial name match.
///
/// Returns the match count alongside the matches; each match carries the
/// number of its upcoming shows.
pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<impl IntoResponse, ApiError> {
    let now = Utc::now();
    let results = VenueStore::new(state.db.pool())
        .search(&form.search_term, now)
        .await?;

    Ok(Json(serde_json::json!({
        "count": results.count,
        "data": results.data,
        "search_term": form.search_term,
    })))
}

/// Return the full venue record plus its shows partitioned into past and
/// upcoming lists against a single "now" snapshot.
pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = VenueId::from(parse_uuid(&id_str)?);

    // One snapshot for the whole request; the store never re-reads the clock.
    let now = Utc::now();
    let detail = VenueStore::new(state.db.pool()).detail(id, now).await?;

    Ok(Json(detail))
}

/// List a new venue.
pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewVenue>,
) -> Result<impl IntoResponse, ApiError> {
    let row = VenueStore::new(state.db.pool()).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(venue_json(&row))))
}

/// Return the current record backing the venue edit form.
pub async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = VenueId::from(parse_uuid(&id_str)?);
    let row = VenueStore::new(state.db.pool()).get(id).await?;
    Ok(Json(venue_json(&row)))
}

/// Apply an edit to an existing venue.
pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(payload): Json<VenueUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let id = VenueId::from(parse_uuid(&id_str)?);
    let row = VenueStore::new(state.db.pool())
        .update(id, &payload)
        .await?;
    Ok(Json(venue_json(&row)))
}

/// Remove a venue; its shows are removed with it.
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = VenueId::from(parse_uuid(&id_str)?);
    VenueStore::new(state.db.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Project a venue row into its response body, decoding the genre list.
fn venue_json(row: &VenueRow) -> serde_json::Value {
    serde_json::json!({
        "id": row.id,
        "name": row.name,
        "city": row.city,
        "state": row.state,
        "address": row.address,
        "phone": row.phone,
        "genres": Genres::decode(&row.genres).into_vec(),
        "image_link": row.image_link,
        "facebook_link": row.facebook_link,
        "website": row.website,
        "seeking_description": row.seeking_description,
        "created_at": row.created_at,
    })
}
