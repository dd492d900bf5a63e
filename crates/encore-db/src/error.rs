//! Error types for the data layer.
//!
//! All store operations propagate [`StoreError`]. The taxonomy mirrors the
//! failure modes a booking mutation can hit: invalid input, a missing
//! record, a broken reference between a show and its parents, or a
//! transaction that failed for any other reason.

use encore_types::GenresError;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required field was missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// No record matched the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A foreign reference was missing or a store constraint was violated.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// A transaction failed to begin, execute, or commit.
    #[error("transaction error: {0}")]
    Transaction(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<GenresError> for StoreError {
    fn from(error: GenresError) -> Self {
        Self::Validation(error.to_string())
    }
}

/// Reclassify driver errors that carry constraint information.
///
/// Foreign-key violations surface as [`StoreError::Integrity`] so callers
/// see the same error whether the existence pre-check or the database
/// constraint caught the broken reference. Everything else stays a
/// [`StoreError::Transaction`].
pub(crate) fn classify_db_error(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_error) = error {
        if matches!(
            db_error.kind(),
            sqlx::error::ErrorKind::ForeignKeyViolation
        ) {
            return StoreError::Integrity(db_error.message().to_owned());
        }
    }
    StoreError::Transaction(error)
}
