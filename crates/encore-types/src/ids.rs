//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Venues, artists, and shows each get a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time -- a show references
//! both a venue and an artist, and a swapped pair of raw UUIDs would
//! persist silently. All IDs use UUID v7 (time-ordered) for efficient
//! database indexing; generation happens app-side at insert time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a venue (a physical location that hosts shows).
    VenueId
}

define_id! {
    /// Unique identifier for an artist (a performer bookable into shows).
    ArtistId
}

define_id! {
    /// Unique identifier for a show (one artist at one venue at a start time).
    ShowId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let venue = VenueId::new();
        let artist = ArtistId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(venue.into_inner(), Uuid::nil());
        assert_ne!(artist.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = VenueId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<VenueId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(restored.is_ok());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = ShowId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
