//! Artist endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/artists` | List all artists |
//! | `POST` | `/artists/search` | Case-insensitive partial-name search |
//! | `GET` | `/artists/{id}` | Detail with past/upcoming shows |
//! | `POST` | `/artists/create` | List a new artist |
//! | `GET` | `/artists/{id}/edit` | Current record backing the edit form |
//! | `POST` | `/artists/{id}/edit` | Apply an edit |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use chrono::Utc;
use encore_db::artist_store::{ArtistRow, ArtistStore};
use encore_types::{ArtistId, ArtistUpdate, Genres, NewArtist};

use crate::error::ApiError;
use crate::forms::{parse_uuid, SearchForm};
use crate::state::AppState;

/// List every artist (id and name), ascending by id.
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let artists = ArtistStore::new(state.db.pool()).list().await?;

    Ok(Json(serde_json::json!({
        "count": artists.len(),
        "artists": artists,
    })))
}

/// Search artists by case-insensitive partial name match.
pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<impl IntoResponse, ApiError> {
    let results = ArtistStore::new(state.db.pool())
        .search(&form.search_term)
        .await?;

    Ok(Json(serde_json::json!({
        "count": results.count,
        "data": results.data,
        "search_term": form.search_term,
    })))
}

/// Return the full artist record plus their shows partitioned into past
/// and upcoming lists against a single "now" snapshot.
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ArtistId::from(parse_uuid(&id_str)?);

    let now = Utc::now();
    let detail = ArtistStore::new(state.db.pool()).detail(id, now).await?;

    Ok(Json(detail))
}

/// List a new artist.
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewArtist>,
) -> Result<impl IntoResponse, ApiError> {
    let row = ArtistStore::new(state.db.pool()).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(artist_json(&row))))
}

/// Return the current record backing the artist edit form.
pub async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ArtistId::from(parse_uuid(&id_str)?);
    let row = ArtistStore::new(state.db.pool()).get(id).await?;
    Ok(Json(artist_json(&row)))
}

/// Apply an edit to an existing artist.
pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(payload): Json<ArtistUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ArtistId::from(parse_uuid(&id_str)?);
    let row = ArtistStore::new(state.db.pool())
        .update(id, &payload)
        .await?;
    Ok(Json(artist_json(&row)))
}

/// Project an artist row into its response body, decoding the genre list.
fn artist_json(row: &ArtistRow) -> serde_json::Value {
    serde_json::json!({
        "id": row.id,
        "name": row.name,
        "city": row.city,
        "state": row.state,
        "phone": row.phone,
        "genres": Genres::decode(&row.genres).into_vec(),
        "image_link": row.image_link,
        "facebook_link": row.facebook_link,
        "website": row.website,
        "seeking_venue": row.seeking_venue,
        "seeking_description": row.seeking_description,
        "created_at": row.created_at,
    })
}
