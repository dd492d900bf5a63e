//! Inbound payloads for create and edit operations.
//!
//! Each payload derives [`validator::Validate`] so required fields are
//! checked before any transaction is opened. Genre lists arrive as plain
//! string vectors and are converted to [`Genres`] (which enforces the
//! encoding rules) via the `genres` accessor on each payload.
//!
//! Edit payloads carry exactly the fields of the original edit forms:
//! name, city, state, phone, genres, and facebook link (plus address for
//! venues). Image links and seeking flags are set at creation time only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::genres::{Genres, GenresError};
use crate::ids::{ArtistId, VenueId};

/// Payload for creating a venue.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewVenue {
    /// Venue name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// City the venue is located in.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// State the venue is located in.
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    /// Street address.
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Ordered genre names.
    #[validate(length(min = 1, message = "at least one genre is required"))]
    pub genres: Vec<String>,
    /// Link to a venue image.
    #[validate(length(min = 1, message = "image_link is required"))]
    pub image_link: String,
    /// Link to the venue's Facebook page.
    #[validate(length(min = 1, message = "facebook_link is required"))]
    pub facebook_link: String,
    /// Venue website, if any.
    pub website: Option<String>,
    /// Free-text description of the talent the venue is seeking.
    pub seeking_description: Option<String>,
}

impl NewVenue {
    /// Convert the raw genre strings into a checked [`Genres`] list.
    ///
    /// # Errors
    ///
    /// Returns [`GenresError`] if any value is empty or contains the
    /// storage delimiter.
    pub fn checked_genres(&self) -> Result<Genres, GenresError> {
        Genres::try_new(self.genres.iter().cloned())
    }
}

/// Payload for editing an existing venue.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VenueUpdate {
    /// Venue name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// City the venue is located in.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// State the venue is located in.
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    /// Street address.
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Ordered genre names.
    #[validate(length(min = 1, message = "at least one genre is required"))]
    pub genres: Vec<String>,
    /// Link to the venue's Facebook page.
    #[validate(length(min = 1, message = "facebook_link is required"))]
    pub facebook_link: String,
}

impl VenueUpdate {
    /// Convert the raw genre strings into a checked [`Genres`] list.
    ///
    /// # Errors
    ///
    /// Returns [`GenresError`] if any value is empty or contains the
    /// storage delimiter.
    pub fn checked_genres(&self) -> Result<Genres, GenresError> {
        Genres::try_new(self.genres.iter().cloned())
    }
}

/// Payload for creating an artist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewArtist {
    /// Artist or act name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Home city.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// Home state.
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Ordered genre names.
    #[validate(length(min = 1, message = "at least one genre is required"))]
    pub genres: Vec<String>,
    /// Link to an artist image.
    #[validate(length(min = 1, message = "image_link is required"))]
    pub image_link: String,
    /// Link to the artist's Facebook page.
    #[validate(length(min = 1, message = "facebook_link is required"))]
    pub facebook_link: String,
    /// Artist website, if any.
    pub website: Option<String>,
    /// Whether the artist is currently looking for venues to play.
    #[serde(default)]
    pub seeking_venue: bool,
    /// Free-text description of what the artist is seeking.
    pub seeking_description: Option<String>,
}

impl NewArtist {
    /// Convert the raw genre strings into a checked [`Genres`] list.
    ///
    /// # Errors
    ///
    /// Returns [`GenresError`] if any value is empty or contains the
    /// storage delimiter.
    pub fn checked_genres(&self) -> Result<Genres, GenresError> {
        Genres::try_new(self.genres.iter().cloned())
    }
}

/// Payload for editing an existing artist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArtistUpdate {
    /// Artist or act name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Home city.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// Home state.
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Ordered genre names.
    #[validate(length(min = 1, message = "at least one genre is required"))]
    pub genres: Vec<String>,
    /// Link to the artist's Facebook page.
    #[validate(length(min = 1, message = "facebook_link is required"))]
    pub facebook_link: String,
}

impl ArtistUpdate {
    /// Convert the raw genre strings into a checked [`Genres`] list.
    ///
    /// # Errors
    ///
    /// Returns [`GenresError`] if any value is empty or contains the
    /// storage delimiter.
    pub fn checked_genres(&self) -> Result<Genres, GenresError> {
        Genres::try_new(self.genres.iter().cloned())
    }
}

/// Payload for scheduling a show.
///
/// Both references must point at existing records; the show store checks
/// existence inside its insert transaction and refuses to create orphans.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewShow {
    /// The performing artist.
    pub artist_id: ArtistId,
    /// The hosting venue.
    pub venue_id: VenueId,
    /// When the show starts.
    pub start_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_venue() -> NewVenue {
        NewVenue {
            name: "The Musical Hop".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            address: "1015 Folsom Street".to_owned(),
            phone: "123-123-1234".to_owned(),
            genres: vec!["Jazz".to_owned(), "Reggae".to_owned()],
            image_link: "https://example.com/hop.jpg".to_owned(),
            facebook_link: "https://facebook.com/TheMusicalHop".to_owned(),
            website: Some("https://themusicalhop.com".to_owned()),
            seeking_description: None,
        }
    }

    #[test]
    fn complete_venue_payload_validates() {
        assert!(sample_venue().validate().is_ok());
    }

    #[test]
    fn missing_name_fails_validation() {
        let mut venue = sample_venue();
        venue.name = String::new();
        assert!(venue.validate().is_err());
    }

    #[test]
    fn empty_genre_list_fails_validation() {
        let mut venue = sample_venue();
        venue.genres.clear();
        assert!(venue.validate().is_err());
    }

    #[test]
    fn genre_with_delimiter_fails_conversion() {
        let mut venue = sample_venue();
        venue.genres = vec!["Rock;Roll".to_owned()];
        assert!(venue.validate().is_ok());
        assert!(venue.checked_genres().is_err());
    }

    #[test]
    fn seeking_venue_defaults_to_false() {
        let json = r#"{
            "name": "Guns N Petals",
            "city": "San Francisco",
            "state": "CA",
            "phone": "326-123-5000",
            "genres": ["Rock n Roll"],
            "image_link": "https://example.com/gnp.jpg",
            "facebook_link": "https://facebook.com/GunsNPetals"
        }"#;
        let artist: Result<NewArtist, _> = serde_json::from_str(json);
        assert_eq!(artist.ok().map(|a| a.seeking_venue), Some(false));
    }
}
