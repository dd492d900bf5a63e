//! Show endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/shows` | All shows joined with venue and artist |
//! | `POST` | `/shows/create` | Schedule a show |
//!
//! Shows have no edit or delete endpoint; they are created only.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use encore_db::show_store::ShowStore;
use encore_types::NewShow;

use crate::error::ApiError;
use crate::state::AppState;

/// List every show joined with its venue name and artist name/image.
pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let shows = ShowStore::new(state.db.pool()).list().await?;

    Ok(Json(serde_json::json!({
        "count": shows.len(),
        "shows": shows,
    })))
}

/// Schedule a new show.
///
/// Fails with an integrity error (422) if the referenced venue or artist
/// does not exist; no row is inserted in that case.
pub async fn create_show(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewShow>,
) -> Result<impl IntoResponse, ApiError> {
    let row = ShowStore::new(state.db.pool()).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
