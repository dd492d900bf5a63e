//! Request extraction helpers shared across handler modules.

use uuid::Uuid;

use crate::error::ApiError;

/// Body of the `POST /venues/search` and `POST /artists/search` forms.
///
/// A missing `search_term` field behaves like an empty term, which
/// matches every record.
#[derive(Debug, serde::Deserialize)]
pub struct SearchForm {
    /// Case-insensitive substring to match against names.
    #[serde(default)]
    pub search_term: String,
}

/// Parse a UUID from a request path segment.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, ApiError> {
    s.parse::<Uuid>()
        .map_err(|e| ApiError::InvalidUuid(format!("{s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_search_term_defaults_to_empty() {
        let form: Result<SearchForm, _> = serde_json::from_str("{}");
        assert_eq!(form.ok().map(|f| f.search_term), Some(String::new()));
    }

    #[test]
    fn malformed_uuid_is_rejected() {
        assert!(parse_uuid("not-a-uuid").is_err());
        assert!(parse_uuid("0198c6a0-0000-7000-8000-000000000000").is_ok());
    }
}
