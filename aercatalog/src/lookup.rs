//! Read-only query surface over the catalog
//!
//! All operations are side-effect-free and preserve catalog insertion
//! order; there is no ranking or relevance scoring. Inactive stations are
//! excluded from every listing here but remain addressable through the
//! direct id/slug lookups.

use std::sync::Arc;

use crate::models::Station;
use crate::store::CatalogStore;

/// Genre token meaning "no genre filter"
pub const GENRE_ALL: &str = "all";

/// Read-only lookup service over a shared catalog
///
/// Cheap to clone (`Arc` inside); one instance is shared across all HTTP
/// handlers. `search` and `by_genre` are independent primitives: combining
/// them is the caller's decision (the HTTP layer applies both
/// conjunctively, see `api::list_stations`).
#[derive(Debug, Clone)]
pub struct LookupService {
    catalog: Arc<CatalogStore>,
}

impl LookupService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Direct access to the underlying catalog
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Active stations in catalog insertion order
    pub fn list_active(&self) -> Vec<Station> {
        self.catalog
            .all()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search across name, description, genre
    /// and location. An empty query matches every active station.
    pub fn search(&self, query: &str) -> Vec<Station> {
        let needle = query.to_lowercase();
        self.catalog
            .all()
            .iter()
            .filter(|s| s.is_active && s.matches_query(&needle))
            .cloned()
            .collect()
    }

    /// Case-insensitive exact genre match; the literal token `"all"`
    /// (case-insensitive) disables the filter and is equivalent to
    /// [`list_active`](Self::list_active).
    pub fn by_genre(&self, genre: &str) -> Vec<Station> {
        let genre = genre.to_lowercase();
        if genre == GENRE_ALL {
            return self.list_active();
        }
        self.catalog
            .all()
            .iter()
            .filter(|s| s.is_active && s.genre_is(&genre))
            .cloned()
            .collect()
    }

    /// Station by id, inactive stations included
    pub fn get_by_id(&self, id: u32) -> Option<Station> {
        self.catalog.get_by_id(id).cloned()
    }

    /// Station by slug, inactive stations included
    pub fn get_by_slug(&self, slug: &str) -> Option<Station> {
        self.catalog.get_by_slug(slug).cloned()
    }
}
