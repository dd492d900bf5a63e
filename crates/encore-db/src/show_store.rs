//! Show persistence and the joined shows listing.
//!
//! A show is a pure association entity: one artist at one venue at a start
//! time. Shows are created only; no edit or delete operation exists. The
//! create path checks that both parents exist inside the same transaction
//! as the insert, so a show can never reference a missing venue or artist
//! -- and the schema's foreign keys back that check up.

use chrono::{DateTime, Utc};
use encore_types::{NewShow, ShowId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{classify_db_error, StoreError};

/// Operations on the `shows` table.
pub struct ShowStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowStore<'a> {
    /// Create a new show store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every show joined with its venue name and artist name/image,
    /// ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`] if the query fails.
    pub async fn list(&self) -> Result<Vec<ShowListing>, StoreError> {
        let rows = sqlx::query_as::<_, ShowListing>(
            r"SELECT s.venue_id, v.name AS venue_name,
                     s.artist_id, a.name AS artist_name,
                     a.image_link AS artist_image_link, s.start_time
              FROM shows s
              JOIN venues v ON v.id = s.venue_id
              JOIN artists a ON a.id = s.artist_id
              ORDER BY s.start_time, s.id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Schedule a new show and return the persisted record.
    ///
    /// Both referenced records are checked for existence inside the insert
    /// transaction; a missing parent fails with [`StoreError::Integrity`]
    /// and no row is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Integrity`] if the venue or artist does not
    /// exist, or [`StoreError::Transaction`] if the insert or commit fails.
    pub async fn create(&self, show: &NewShow) -> Result<ShowRow, StoreError> {
        let id = ShowId::new();

        let mut tx = self.pool.begin().await?;

        let venue_exists: bool =
            sqlx::query_scalar(r"SELECT EXISTS (SELECT 1 FROM venues WHERE id = $1)")
                .bind(show.venue_id.into_inner())
                .fetch_one(&mut *tx)
                .await?;
        if !venue_exists {
            return Err(StoreError::Integrity(format!(
                "venue {} does not exist",
                show.venue_id
            )));
        }

        let artist_exists: bool =
            sqlx::query_scalar(r"SELECT EXISTS (SELECT 1 FROM artists WHERE id = $1)")
                .bind(show.artist_id.into_inner())
                .fetch_one(&mut *tx)
                .await?;
        if !artist_exists {
            return Err(StoreError::Integrity(format!(
                "artist {} does not exist",
                show.artist_id
            )));
        }

        let row = sqlx::query_as::<_, ShowRow>(
            r"INSERT INTO shows (id, venue_id, artist_id, start_time)
              VALUES ($1, $2, $3, $4)
              RETURNING id, venue_id, artist_id, start_time, created_at",
        )
        .bind(id.into_inner())
        .bind(show.venue_id.into_inner())
        .bind(show.artist_id.into_inner())
        .bind(show.start_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify_db_error)?;

        tx.commit().await?;

        tracing::info!(
            show_id = %row.id,
            venue_id = %row.venue_id,
            artist_id = %row.artist_id,
            start_time = %row.start_time,
            "Show listed"
        );
        Ok(row)
    }
}

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `shows` table.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct ShowRow {
    /// Show UUID.
    pub id: Uuid,
    /// The hosting venue's UUID.
    pub venue_id: Uuid,
    /// The performing artist's UUID.
    pub artist_id: Uuid,
    /// When the show starts.
    pub start_time: DateTime<Utc>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// One entry in the shows listing, joined with both parents.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct ShowListing {
    /// The hosting venue's UUID.
    pub venue_id: Uuid,
    /// The hosting venue's name.
    pub venue_name: String,
    /// The performing artist's UUID.
    pub artist_id: Uuid,
    /// The performing artist's name.
    pub artist_name: String,
    /// Link to the performing artist's image.
    pub artist_image_link: String,
    /// When the show starts.
    pub start_time: DateTime<Utc>,
}
