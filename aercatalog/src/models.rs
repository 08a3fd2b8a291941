//! Data models for the station catalog
//!
//! A [`Station`] is immutable once it has been inserted; a [`StationSeed`]
//! is the record a caller supplies before the store has assigned an id.
//! Optional fields are normalized at ingestion so that absent, null and
//! empty-string inputs all end up as `None`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A radio station in the catalog
///
/// JSON field names are camelCase on the wire (`streamUrl`, `isActive`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Unique positive id, assigned by the store, never reused
    pub id: u32,
    /// Display name (non-empty)
    pub name: String,
    /// Unique lowercase hyphenated identifier, stable for URL lookups
    pub slug: String,
    /// FM frequency as displayed (e.g., "106-108 FM")
    pub frequency: Option<String>,
    pub description: Option<String>,
    /// Playable transport address (non-empty)
    pub stream_url: String,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub genre: Option<String>,
    pub location: Option<String>,
    /// Inactive stations are excluded from listings and search but stay
    /// addressable by direct id/slug lookup
    pub is_active: bool,
    /// Display gradient start color (not behaviorally significant)
    pub gradient_from: String,
    /// Display gradient end color
    pub gradient_to: String,
}

impl Station {
    /// Case-insensitive substring match against name, description, genre
    /// and location. `needle` must already be lower-cased. Missing optional
    /// fields never match.
    pub fn matches_query(&self, needle: &str) -> bool {
        let field_contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(needle))
        };

        self.name.to_lowercase().contains(needle)
            || field_contains(&self.description)
            || field_contains(&self.genre)
            || field_contains(&self.location)
    }

    /// Case-insensitive exact match on the genre field. `genre` must
    /// already be lower-cased. Stations without a genre never match.
    pub fn genre_is(&self, genre: &str) -> bool {
        self.genre.as_deref().is_some_and(|g| g.to_lowercase() == genre)
    }
}

/// A station record before insertion (no id yet)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationSeed {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub stream_url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Defaults to true when absent from the seed
    #[serde(default)]
    pub is_active: Option<bool>,
    pub gradient_from: String,
    pub gradient_to: String,
}

/// Collapses absent, null and empty/whitespace strings into `None`
pub(crate) fn normalize_optional(field: Option<String>) -> Option<String> {
    field.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
