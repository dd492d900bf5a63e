//! Venue persistence, search, and show aggregation.
//!
//! Operations on the `venues` table plus the venue-side show queries:
//!
//! - Grouped-by-area listing for the venues index page
//! - Case-insensitive partial-name search with upcoming-show counts
//! - Detail view with past/upcoming show partitioning
//! - Create / update / delete mutations, each inside its own transaction
//!
//! Every mutation follows attempt -> commit-or-rollback -> release: an
//! error return before `commit` drops the transaction guard, which rolls
//! back, so no partial record is ever visible.

use chrono::{DateTime, Utc};
use encore_types::{Genres, NewVenue, VenueId, VenueUpdate};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::StoreError;
use crate::partition::partition_by_start;

/// Columns returned for a full venue record.
const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, \
     image_link, facebook_link, website, seeking_description, created_at";

/// Operations on the `venues` table.
pub struct VenueStore<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueStore<'a> {
    /// Create a new venue store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all venues grouped by exact (city, state) pair.
    ///
    /// Rows are fetched ordered by city, state, then id, and grouped by
    /// consecutive run, so group order follows the sorted city/state
    /// sequence and venues within a group ascend by id. Key equality is
    /// exact-string match: `Brooklyn` and `brooklyn` are distinct areas.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`] if the query fails.
    pub async fn list_grouped_by_area(&self) -> Result<Vec<AreaGroup>, StoreError> {
        let rows = sqlx::query_as::<_, VenueAreaRow>(
            r"SELECT id, name, city, state
              FROM venues
              ORDER BY city, state, id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(group_by_area(rows))
    }

    /// Search venues whose name contains `term` (case-insensitive).
    ///
    /// An empty term matches all venues. Each match carries the number of
    /// its upcoming shows, evaluated against the single `now` snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`] if the query fails.
    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<VenueSearchResults, StoreError> {
        let pattern = format!("%{term}%");
        let data = sqlx::query_as::<_, VenueMatch>(
            r"SELECT v.id, v.name,
                     (SELECT COUNT(*) FROM shows s
                       WHERE s.venue_id = v.id AND s.start_time >= $2)
                     AS num_upcoming_shows
              FROM venues v
              WHERE v.name ILIKE $1
              ORDER BY v.id",
        )
        .bind(&pattern)
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(VenueSearchResults {
            count: data.len(),
            data,
        })
    }

    /// Fetch a single venue record by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no venue has that id, or
    /// [`StoreError::Transaction`] if the query fails.
    pub async fn get(&self, id: VenueId) -> Result<VenueRow, StoreError> {
        let query = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, VenueRow>(&query)
            .bind(id.into_inner())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("venue {id}")))
    }

    /// Fetch a venue plus its shows partitioned into past and upcoming.
    ///
    /// The partition is evaluated against the single `now` passed in;
    /// callers snapshot the clock once per request so a show cannot flip
    /// partitions mid-computation. Shows are ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no venue has that id, or
    /// [`StoreError::Transaction`] if a query fails.
    pub async fn detail(
        &self,
        id: VenueId,
        now: DateTime<Utc>,
    ) -> Result<VenueDetail, StoreError> {
        let venue = self.get(id).await?;

        let shows = sqlx::query_as::<_, VenueShowRow>(
            r"SELECT s.artist_id, a.name AS artist_name,
                     a.image_link AS artist_image_link, s.start_time
              FROM shows s
              JOIN artists a ON a.id = s.artist_id
              WHERE s.venue_id = $1
              ORDER BY s.start_time, s.id",
        )
        .bind(id.into_inner())
        .fetch_all(self.pool)
        .await?;

        let (past, upcoming) = partition_by_start(shows, now, |s| s.start_time);
        let past_shows: Vec<VenueShowEntry> =
            past.into_iter().map(VenueShowEntry::from).collect();
        let upcoming_shows: Vec<VenueShowEntry> =
            upcoming.into_iter().map(VenueShowEntry::from).collect();

        Ok(VenueDetail {
            id: venue.id,
            name: venue.name,
            genres: Genres::decode(&venue.genres).into_vec(),
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    /// Insert a new venue and return the persisted record.
    ///
    /// Required fields and the genre list are validated before the
    /// transaction is opened; any failure after that rolls back, so the
    /// record is never left partially persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] on a missing or malformed field,
    /// or [`StoreError::Transaction`] if the insert or commit fails.
    pub async fn create(&self, venue: &NewVenue) -> Result<VenueRow, StoreError> {
        venue.validate()?;
        let genres = venue.checked_genres()?;
        let id = VenueId::new();

        let mut tx = self.pool.begin().await?;

        let query = format!(
            r"INSERT INTO venues
                  (id, name, city, state, address, phone, genres,
                   image_link, facebook_link, website, seeking_description)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
              RETURNING {VENUE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, VenueRow>(&query)
            .bind(id.into_inner())
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(genres.encode())
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(&venue.website)
            .bind(&venue.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(venue_id = %row.id, name = %row.name, "Venue listed");
        Ok(row)
    }

    /// Apply an edit to an existing venue and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] on a missing or malformed field,
    /// [`StoreError::NotFound`] if no venue has that id, or
    /// [`StoreError::Transaction`] if the update or commit fails.
    pub async fn update(
        &self,
        id: VenueId,
        update: &VenueUpdate,
    ) -> Result<VenueRow, StoreError> {
        update.validate()?;
        let genres = update.checked_genres()?;

        let mut tx = self.pool.begin().await?;

        let query = format!(
            r"UPDATE venues
              SET name = $2, city = $3, state = $4, address = $5,
                  phone = $6, genres = $7, facebook_link = $8
              WHERE id = $1
              RETURNING {VENUE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, VenueRow>(&query)
            .bind(id.into_inner())
            .bind(&update.name)
            .bind(&update.city)
            .bind(&update.state)
            .bind(&update.address)
            .bind(&update.phone)
            .bind(genres.encode())
            .bind(&update.facebook_link)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("venue {id}")))?;

        tx.commit().await?;

        tracing::info!(venue_id = %row.id, name = %row.name, "Venue edited");
        Ok(row)
    }

    /// Delete a venue by id. The venue's shows are removed with it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no venue has that id (never an
    /// unrelated error), or [`StoreError::Transaction`] if the delete or
    /// commit fails.
    pub async fn delete(&self, id: VenueId) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(r"DELETE FROM venues WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("venue {id}")));
        }

        tx.commit().await?;

        tracing::info!(venue_id = %id, "Venue deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Row and aggregation types
// ---------------------------------------------------------------------------

/// A full row from the `venues` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VenueRow {
    /// Venue UUID.
    pub id: Uuid,
    /// Venue name.
    pub name: String,
    /// City the venue is located in.
    pub city: String,
    /// State the venue is located in.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Encoded genre list (see [`encore_types::genres`]).
    pub genres: String,
    /// Link to a venue image.
    pub image_link: String,
    /// Link to the venue's Facebook page.
    pub facebook_link: String,
    /// Venue website, if any.
    pub website: Option<String>,
    /// Free-text description of the talent the venue is seeking.
    pub seeking_description: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// The id/name/area columns used by the grouped listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VenueAreaRow {
    /// Venue UUID.
    pub id: Uuid,
    /// Venue name.
    pub name: String,
    /// City the venue is located in.
    pub city: String,
    /// State the venue is located in.
    pub state: String,
}

/// One (city, state) group in the venues listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AreaGroup {
    /// Group city.
    pub city: String,
    /// Group state.
    pub state: String,
    /// Venues in this area, ascending by id.
    pub venues: Vec<VenueSummary>,
}

/// Venue id and name inside an area group.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VenueSummary {
    /// Venue UUID.
    pub id: Uuid,
    /// Venue name.
    pub name: String,
}

/// A single venue search match.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct VenueMatch {
    /// Venue UUID.
    pub id: Uuid,
    /// Venue name.
    pub name: String,
    /// Number of shows starting at or after the search's "now" snapshot.
    pub num_upcoming_shows: i64,
}

/// Venue search results with the match count the UI reports.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VenueSearchResults {
    /// Number of matches.
    pub count: usize,
    /// The matched venues, ascending by id.
    pub data: Vec<VenueMatch>,
}

/// A venue's show joined with its artist, before partitioning.
#[derive(Debug, Clone, sqlx::FromRow)]
struct VenueShowRow {
    artist_id: Uuid,
    artist_name: String,
    artist_image_link: String,
    start_time: DateTime<Utc>,
}

/// One show entry on a venue detail page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VenueShowEntry {
    /// The performing artist's UUID.
    pub artist_id: Uuid,
    /// The performing artist's name.
    pub artist_name: String,
    /// Link to the performing artist's image.
    pub artist_image_link: String,
    /// Show start time, RFC 3339 formatted.
    pub start_time: String,
}

impl From<VenueShowRow> for VenueShowEntry {
    fn from(row: VenueShowRow) -> Self {
        Self {
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time.to_rfc3339(),
        }
    }
}

/// A venue detail page: the full record plus partitioned shows.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VenueDetail {
    /// Venue UUID.
    pub id: Uuid,
    /// Venue name.
    pub name: String,
    /// Decoded genre list, in stored order.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
    /// City the venue is located in.
    pub city: String,
    /// State the venue is located in.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Venue website, if any.
    pub website: Option<String>,
    /// Link to the venue's Facebook page.
    pub facebook_link: String,
    /// Free-text description of the talent the venue is seeking.
    pub seeking_description: Option<String>,
    /// Link to a venue image.
    pub image_link: String,
    /// Shows that started strictly before the request's "now".
    pub past_shows: Vec<VenueShowEntry>,
    /// Shows starting at or after the request's "now".
    pub upcoming_shows: Vec<VenueShowEntry>,
    /// Number of past shows.
    pub past_shows_count: usize,
    /// Number of upcoming shows.
    pub upcoming_shows_count: usize,
}

/// Group venues by exact (city, state) pair.
///
/// Expects rows already ordered so that equal (city, state) pairs are
/// adjacent; each consecutive run becomes one group.
fn group_by_area(rows: Vec<VenueAreaRow>) -> Vec<AreaGroup> {
    let mut groups: Vec<AreaGroup> = Vec::new();
    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
        };
        match groups.last_mut() {
            Some(group) if group.city == row.city && group.state == row.state => {
                group.venues.push(summary);
            }
            _ => groups.push(AreaGroup {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn area_row(name: &str, city: &str, state: &str) -> VenueAreaRow {
        VenueAreaRow {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
        }
    }

    #[test]
    fn grouping_splits_on_city_state_pairs() {
        let rows = vec![
            area_row("The Musical Hop", "San Francisco", "CA"),
            area_row("Park Square Live Music & Coffee", "San Francisco", "CA"),
            area_row("The Dueling Pianos Bar", "New York", "NY"),
        ];
        let groups = group_by_area(rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.first().map(|g| g.venues.len()),
            Some(2)
        );
        assert_eq!(
            groups.last().map(|g| (g.city.as_str(), g.state.as_str())),
            Some(("New York", "NY"))
        );
    }

    #[test]
    fn grouping_keys_are_case_sensitive() {
        let rows = vec![
            area_row("A", "Brooklyn", "NY"),
            area_row("B", "brooklyn", "NY"),
        ];
        let groups = group_by_area(rows);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn same_city_different_state_splits() {
        let rows = vec![
            area_row("A", "Springfield", "IL"),
            area_row("B", "Springfield", "MA"),
        ];
        let groups = group_by_area(rows);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
