//! Shared type definitions for the Encore booking platform.
//!
//! This crate holds the types that cross crate boundaries:
//!
//! - [`ids`] -- strongly-typed UUID wrappers for venues, artists, and shows
//! - [`genres`] -- the order-preserving delimited genre list codec
//! - [`payloads`] -- validated inbound payloads for create/edit operations
//!
//! TypeScript bindings for the dashboard frontend are generated from these
//! types via [`ts_rs`].

pub mod genres;
pub mod ids;
pub mod payloads;

// Re-export primary types for convenience.
pub use genres::{Genres, GenresError, GENRE_DELIMITER};
pub use ids::{ArtistId, ShowId, VenueId};
pub use payloads::{ArtistUpdate, NewArtist, NewShow, NewVenue, VenueUpdate};
