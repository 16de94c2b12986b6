//! Artwork record definition.

use serde::{Deserialize, Serialize};

/// One artwork in the catalog.
///
/// Created at program start from static configuration and never mutated
/// during a session. `year` is a string rather than a number: catalogs carry
/// values like `"c. 1888"` or `"1923–24"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Artwork title.
    pub title: String,

    /// Artist name.
    pub artist: String,

    /// Year of creation, free-form.
    #[serde(default)]
    pub year: String,

    /// Image reference for the host rendering environment. The core never
    /// loads or interprets it.
    #[serde(default)]
    pub image_ref: String,

    /// The configured "true" auction price a guess is scored against.
    pub reference_price: u64,
}

impl ArtworkRecord {
    /// Create a record with empty year and image reference.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, reference_price: u64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year: String::new(),
            image_ref: String::new(),
            reference_price,
        }
    }

    /// Set the year.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }
}
