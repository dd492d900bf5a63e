//! Booking API server for the Encore platform.
//!
//! This crate provides an Axum HTTP server that exposes the booking
//! surface as a JSON API:
//!
//! - **Venue endpoints** -- grouped listing, search, detail with
//!   past/upcoming shows, create, edit, delete
//! - **Artist endpoints** -- listing, search, detail, create, edit
//! - **Show endpoints** -- joined listing and guarded creation
//!
//! # Architecture
//!
//! Every handler receives the shared [`AppState`] (the injected
//! `PostgreSQL` pool handle), constructs the store it needs for the
//! request, and snapshots the clock once when a past/upcoming partition
//! is involved. Failures convert to [`error::ApiError`] and surface as a
//! JSON `{error, status}` body -- 404 for missing records, 400 for
//! invalid input, 422 for broken references, 500 otherwise.
//!
//! HTML rendering belongs to the separate dashboard frontend; this
//! server speaks JSON only.

pub mod artists;
pub mod error;
pub mod forms;
pub mod router;
pub mod server;
pub mod shows;
pub mod state;
pub mod venues;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
