//! Artist persistence, search, and show aggregation.
//!
//! Operations on the `artists` table plus the artist-side show queries.
//! The shape mirrors [`crate::venue_store`]: listing, case-insensitive
//! partial-name search, detail with past/upcoming partitioning, and
//! transactional create/update. Artists are never deleted in the current
//! design.

use chrono::{DateTime, Utc};
use encore_types::{ArtistId, ArtistUpdate, Genres, NewArtist};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::StoreError;
use crate::partition::partition_by_start;

/// Columns returned for a full artist record.
const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description, created_at";

/// Operations on the `artists` table.
pub struct ArtistStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistStore<'a> {
    /// Create a new artist store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every artist (id and name), ascending by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`] if the query fails.
    pub async fn list(&self) -> Result<Vec<ArtistSummary>, StoreError> {
        let rows = sqlx::query_as::<_, ArtistSummary>(
            r"SELECT id, name FROM artists ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Search artists whose name contains `term` (case-insensitive).
    ///
    /// An empty term matches all artists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`] if the query fails.
    pub async fn search(&self, term: &str) -> Result<ArtistSearchResults, StoreError> {
        let pattern = format!("%{term}%");
        let data = sqlx::query_as::<_, ArtistSummary>(
            r"SELECT id, name
              FROM artists
              WHERE name ILIKE $1
              ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(ArtistSearchResults {
            count: data.len(),
            data,
        })
    }

    /// Fetch a single artist record by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no artist has that id, or
    /// [`StoreError::Transaction`] if the query fails.
    pub async fn get(&self, id: ArtistId) -> Result<ArtistRow, StoreError> {
        let query = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, ArtistRow>(&query)
            .bind(id.into_inner())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("artist {id}")))
    }

    /// Fetch an artist plus their shows partitioned into past and upcoming.
    ///
    /// The partition is evaluated against the single `now` passed in.
    /// Shows are ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no artist has that id, or
    /// [`StoreError::Transaction`] if a query fails.
    pub async fn detail(
        &self,
        id: ArtistId,
        now: DateTime<Utc>,
    ) -> Result<ArtistDetail, StoreError> {
        let artist = self.get(id).await?;

        let shows = sqlx::query_as::<_, ArtistShowRow>(
            r"SELECT s.venue_id, v.name AS venue_name,
                     v.image_link AS venue_image_link, s.start_time
              FROM shows s
              JOIN venues v ON v.id = s.venue_id
              WHERE s.artist_id = $1
              ORDER BY s.start_time, s.id",
        )
        .bind(id.into_inner())
        .fetch_all(self.pool)
        .await?;

        let (past, upcoming) = partition_by_start(shows, now, |s| s.start_time);
        let past_shows: Vec<ArtistShowEntry> =
            past.into_iter().map(ArtistShowEntry::from).collect();
        let upcoming_shows: Vec<ArtistShowEntry> =
            upcoming.into_iter().map(ArtistShowEntry::from).collect();

        Ok(ArtistDetail {
            id: artist.id,
            name: artist.name,
            genres: Genres::decode(&artist.genres).into_vec(),
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    /// Insert a new artist and return the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] on a missing or malformed field,
    /// or [`StoreError::Transaction`] if the insert or commit fails.
    pub async fn create(&self, artist: &NewArtist) -> Result<ArtistRow, StoreError> {
        artist.validate()?;
        let genres = artist.checked_genres()?;
        let id = ArtistId::new();

        let mut tx = self.pool.begin().await?;

        let query = format!(
            r"INSERT INTO artists
                  (id, name, city, state, phone, genres, image_link,
                   facebook_link, website, seeking_venue, seeking_description)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
              RETURNING {ARTIST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArtistRow>(&query)
            .bind(id.into_inner())
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(genres.encode())
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(&artist.website)
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(artist_id = %row.id, name = %row.name, "Artist listed");
        Ok(row)
    }

    /// Apply an edit to an existing artist and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] on a missing or malformed field,
    /// [`StoreError::NotFound`] if no artist has that id, or
    /// [`StoreError::Transaction`] if the update or commit fails.
    pub async fn update(
        &self,
        id: ArtistId,
        update: &ArtistUpdate,
    ) -> Result<ArtistRow, StoreError> {
        update.validate()?;
        let genres = update.checked_genres()?;

        let mut tx = self.pool.begin().await?;

        let query = format!(
            r"UPDATE artists
              SET name = $2, city = $3, state = $4, phone = $5,
                  genres = $6, facebook_link = $7
              WHERE id = $1
              RETURNING {ARTIST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArtistRow>(&query)
            .bind(id.into_inner())
            .bind(&update.name)
            .bind(&update.city)
            .bind(&update.state)
            .bind(&update.phone)
            .bind(genres.encode())
            .bind(&update.facebook_link)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("artist {id}")))?;

        tx.commit().await?;

        tracing::info!(artist_id = %row.id, name = %row.name, "Artist edited");
        Ok(row)
    }
}

// ---------------------------------------------------------------------------
// Row and aggregation types
// ---------------------------------------------------------------------------

/// A full row from the `artists` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArtistRow {
    /// Artist UUID.
    pub id: Uuid,
    /// Artist or act name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Encoded genre list (see [`encore_types::genres`]).
    pub genres: String,
    /// Link to an artist image.
    pub image_link: String,
    /// Link to the artist's Facebook page.
    pub facebook_link: String,
    /// Artist website, if any.
    pub website: Option<String>,
    /// Whether the artist is currently looking for venues to play.
    pub seeking_venue: bool,
    /// Free-text description of what the artist is seeking.
    pub seeking_description: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Artist id and name, used by the listing and search results.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct ArtistSummary {
    /// Artist UUID.
    pub id: Uuid,
    /// Artist or act name.
    pub name: String,
}

/// Artist search results with the match count the UI reports.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtistSearchResults {
    /// Number of matches.
    pub count: usize,
    /// The matched artists, ascending by id.
    pub data: Vec<ArtistSummary>,
}

/// An artist's show joined with its venue, before partitioning.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ArtistShowRow {
    venue_id: Uuid,
    venue_name: String,
    venue_image_link: String,
    start_time: DateTime<Utc>,
}

/// One show entry on an artist detail page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtistShowEntry {
    /// The hosting venue's UUID.
    pub venue_id: Uuid,
    /// The hosting venue's name.
    pub venue_name: String,
    /// Link to the hosting venue's image.
    pub venue_image_link: String,
    /// Show start time, RFC 3339 formatted.
    pub start_time: String,
}

impl From<ArtistShowRow> for ArtistShowEntry {
    fn from(row: ArtistShowRow) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            start_time: row.start_time.to_rfc3339(),
        }
    }
}

/// An artist detail page: the full record plus partitioned shows.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtistDetail {
    /// Artist UUID.
    pub id: Uuid,
    /// Artist or act name.
    pub name: String,
    /// Decoded genre list, in stored order.
    pub genres: Vec<String>,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Artist website, if any.
    pub website: Option<String>,
    /// Link to the artist's Facebook page.
    pub facebook_link: String,
    /// Whether the artist is currently looking for venues to play.
    pub seeking_venue: bool,
    /// Free-text description of what the artist is seeking.
    pub seeking_description: Option<String>,
    /// Link to an artist image.
    pub image_link: String,
    /// Shows that started strictly before the request's "now".
    pub past_shows: Vec<ArtistShowEntry>,
    /// Shows starting at or after the request's "now".
    pub upcoming_shows: Vec<ArtistShowEntry>,
    /// Number of past shows.
    pub past_shows_count: usize,
    /// Number of upcoming shows.
    pub upcoming_shows_count: usize,
}
