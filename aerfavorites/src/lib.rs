//! User favorites for AerRadio
//!
//! A small keyed store associating user ids with station ids, plus the
//! axum router exposing it. The store is independent of the catalog beyond
//! referencing station ids; one instance is shared behind an `Arc`.
//!
//! # Example
//!
//! ```
//! use aerfavorites::FavoritesStore;
//!
//! let store = FavoritesStore::new();
//! store.add(5, "u1");
//! assert!(store.is_favorite(5, "u1"));
//! assert!(store.remove(5, "u1"));
//! assert!(!store.remove(5, "u1"));
//! ```

pub mod api;
pub mod openapi;
pub mod store;

// Re-exports
pub use openapi::ApiDoc;
pub use store::{Favorite, FavoritesStore};
