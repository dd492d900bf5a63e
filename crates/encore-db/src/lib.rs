//! Data layer for the Encore booking platform (`PostgreSQL`).
//!
//! `PostgreSQL` is the single persisted store: venues, artists, and the
//! shows that associate them. This crate provides the connection pool,
//! embedded migrations, and one store per record kind. Stores take the
//! pool handle explicitly -- there is no process-wide database singleton.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler (encore-api)
//!     |
//!     +-- VenueStore   (grouped listing, search, detail, CRUD)
//!     +-- ArtistStore  (listing, search, detail, create/update)
//!     +-- ShowStore    (joined listing, guarded create)
//!          |
//!          +-- PostgresPool --> PostgreSQL
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`venue_store`] -- venue queries, aggregation, and mutations
//! - [`artist_store`] -- artist queries, aggregation, and mutations
//! - [`show_store`] -- show listing and guarded creation
//! - [`partition`] -- single-snapshot past/upcoming partitioning
//! - [`error`] -- shared error taxonomy

pub mod artist_store;
pub mod error;
pub mod partition;
pub mod postgres;
pub mod show_store;
pub mod venue_store;

// Re-export primary types for convenience.
pub use artist_store::{
    ArtistDetail, ArtistRow, ArtistSearchResults, ArtistShowEntry, ArtistStore, ArtistSummary,
};
pub use error::StoreError;
pub use partition::partition_by_start;
pub use postgres::{PostgresConfig, PostgresPool};
pub use show_store::{ShowListing, ShowRow, ShowStore};
pub use venue_store::{
    AreaGroup, VenueDetail, VenueMatch, VenueRow, VenueSearchResults, VenueShowEntry, VenueStore,
    VenueSummary,
};
