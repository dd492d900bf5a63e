//! Shared application state for the booking API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool handle that every request's
//! stores are constructed from. The handle is injected at startup and
//! passed into each operation explicitly -- there is no process-wide
//! database singleton, so tests and alternate binaries can wire their own
//! pool.

use encore_db::PostgresPool;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool handle to the booking database.
    pub db: PostgresPool,
}

impl AppState {
    /// Build application state around an existing pool handle.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }
}
