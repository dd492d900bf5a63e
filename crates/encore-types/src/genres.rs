//! Order-preserving genre list codec.
//!
//! Genres are persisted as a single delimited `TEXT` column rather than a
//! join table. The codec here is the only place that knows the encoding;
//! stores call [`Genres::encode`] on the way in and [`Genres::decode`] on
//! the way out, and the decoded list is guaranteed to match the encoded
//! one element for element, in order.
//!
//! Losslessness holds because [`Genres::try_new`] rejects values that are
//! empty or contain the delimiter, so no genre can alias a segment
//! boundary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Separator between genre values in the encoded column.
pub const GENRE_DELIMITER: char = ';';

/// Errors produced when constructing a [`Genres`] list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenresError {
    /// A genre value was empty or whitespace-only.
    #[error("genre values must be non-empty")]
    EmptyValue,

    /// A genre value contained the storage delimiter.
    #[error("genre value {0:?} contains the reserved delimiter {GENRE_DELIMITER:?}")]
    ReservedDelimiter(String),
}

/// An ordered list of genre names, safe to round-trip through storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Build a genre list, rejecting values that would not survive the
    /// delimited encoding.
    ///
    /// # Errors
    ///
    /// Returns [`GenresError::EmptyValue`] if any value is empty after
    /// trimming, or [`GenresError::ReservedDelimiter`] if any value
    /// contains [`GENRE_DELIMITER`].
    pub fn try_new<I, S>(values: I) -> Result<Self, GenresError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Vec::new();
        for value in values {
            let value: String = value.into();
            if value.trim().is_empty() {
                return Err(GenresError::EmptyValue);
            }
            if value.contains(GENRE_DELIMITER) {
                return Err(GenresError::ReservedDelimiter(value));
            }
            out.push(value);
        }
        Ok(Self(out))
    }

    /// Encode the list into the delimited storage representation.
    pub fn encode(&self) -> String {
        self.0.join(&GENRE_DELIMITER.to_string())
    }

    /// Decode a stored column value back into the ordered list.
    ///
    /// Empty segments are skipped, so decoding an empty column yields an
    /// empty list rather than `[""]`.
    pub fn decode(encoded: &str) -> Self {
        Self(
            encoded
                .split(GENRE_DELIMITER)
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Number of genres in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the genre names in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list, yielding the genre names in order.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_order() {
        let genres = Genres::try_new(["Jazz", "Blues"]).ok();
        assert_eq!(
            genres.as_ref().map(Genres::encode).as_deref(),
            Some("Jazz;Blues")
        );
        let decoded = Genres::decode("Jazz;Blues");
        assert_eq!(Some(decoded), genres);
        assert_eq!(
            Genres::decode("Jazz;Blues").into_vec(),
            vec!["Jazz".to_owned(), "Blues".to_owned()]
        );
    }

    #[test]
    fn single_genre_roundtrip() {
        let genres = Genres::decode("Classical");
        assert_eq!(genres.as_slice(), ["Classical".to_owned()]);
        assert_eq!(genres.encode(), "Classical");
    }

    #[test]
    fn empty_column_decodes_to_empty_list() {
        assert!(Genres::decode("").is_empty());
    }

    #[test]
    fn rejects_empty_value() {
        assert_eq!(
            Genres::try_new(["Jazz", "  "]),
            Err(GenresError::EmptyValue)
        );
    }

    #[test]
    fn rejects_delimiter_in_value() {
        let result = Genres::try_new(["Rock;Roll"]);
        assert_eq!(
            result,
            Err(GenresError::ReservedDelimiter("Rock;Roll".to_owned()))
        );
    }

    #[test]
    fn genre_values_keep_internal_spaces() {
        let genres = Genres::try_new(["Rhythm & Blues", "Hip-Hop"]).ok();
        let encoded = genres.as_ref().map(Genres::encode);
        assert_eq!(encoded.as_deref(), Some("Rhythm & Blues;Hip-Hop"));
        assert_eq!(
            encoded.map(|e| Genres::decode(&e)),
            genres
        );
    }
}
