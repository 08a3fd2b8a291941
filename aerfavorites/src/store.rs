//! In-memory favorites store
//!
//! Keyed association between a user id and a station id. The store uses an
//! interior `RwLock` so one instance can be shared across HTTP handlers;
//! writes are serialized per store. Station ids are not validated against
//! the catalog here (the directory UI only ever favorites stations it just
//! listed).

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// A favorite row: one user bookmarking one station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Unique row id, assigned by the store
    pub id: u32,
    pub station_id: u32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct FavoritesInner {
    /// Rows in insertion order
    rows: Vec<Favorite>,
    next_id: u32,
}

/// Shared favorites store
///
/// At most one row exists per `(station_id, user_id)` pair: [`add`](FavoritesStore::add)
/// is an upsert and returns the existing row on a repeat add.
#[derive(Debug)]
pub struct FavoritesStore {
    inner: RwLock<FavoritesInner>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(FavoritesInner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Adds a favorite, or returns the existing row for the pair
    pub fn add(&self, station_id: u32, user_id: &str) -> Favorite {
        let mut inner = self.inner.write().unwrap();

        if let Some(existing) = inner
            .rows
            .iter()
            .find(|f| f.station_id == station_id && f.user_id == user_id)
        {
            return existing.clone();
        }

        let favorite = Favorite {
            id: inner.next_id,
            station_id,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.rows.push(favorite.clone());
        debug!(station_id, user_id, "Favorite added");
        favorite
    }

    /// Removes the favorite for the pair; returns false when none existed
    pub fn remove(&self, station_id: u32, user_id: &str) -> bool {
        let mut inner = self.inner.write().unwrap();
        let before = inner.rows.len();
        inner
            .rows
            .retain(|f| !(f.station_id == station_id && f.user_id == user_id));
        let removed = inner.rows.len() != before;
        if removed {
            debug!(station_id, user_id, "Favorite removed");
        }
        removed
    }

    /// Whether the pair is currently favorited
    pub fn is_favorite(&self, station_id: u32, user_id: &str) -> bool {
        let inner = self.inner.read().unwrap();
        inner
            .rows
            .iter()
            .any(|f| f.station_id == station_id && f.user_id == user_id)
    }

    /// All favorites of one user, in insertion order
    pub fn list_by_user(&self, user_id: &str) -> Vec<Favorite> {
        let inner = self.inner.read().unwrap();
        inner
            .rows
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_check_then_remove() {
        let store = FavoritesStore::new();
        assert!(!store.is_favorite(5, "u1"));

        let favorite = store.add(5, "u1");
        assert_eq!(favorite.id, 1);
        assert_eq!(favorite.station_id, 5);
        assert!(store.is_favorite(5, "u1"));
        assert!(!store.is_favorite(5, "u2"));

        assert!(store.remove(5, "u1"));
        assert!(!store.is_favorite(5, "u1"));
    }

    #[test]
    fn remove_missing_returns_false() {
        let store = FavoritesStore::new();
        assert!(!store.remove(42, "nobody"));
    }

    #[test]
    fn repeated_add_is_an_upsert() {
        let store = FavoritesStore::new();
        let first = store.add(5, "u1");
        let second = store.add(5, "u1");

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(store.list_by_user("u1").len(), 1);

        // A single remove fully clears the pair
        assert!(store.remove(5, "u1"));
        assert!(!store.is_favorite(5, "u1"));
    }

    #[test]
    fn list_by_user_is_scoped_and_ordered() {
        let store = FavoritesStore::new();
        store.add(3, "u1");
        store.add(1, "u2");
        store.add(7, "u1");

        let stations: Vec<u32> = store
            .list_by_user("u1")
            .iter()
            .map(|f| f.station_id)
            .collect();
        assert_eq!(stations, vec![3, 7]);
        assert_eq!(store.list_by_user("u3").len(), 0);
    }

    #[test]
    fn favorite_json_uses_camel_case() {
        let store = FavoritesStore::new();
        let json = serde_json::to_value(store.add(5, "u1")).unwrap();
        assert!(json.get("stationId").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
