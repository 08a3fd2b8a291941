//! Station catalog for AerRadio
//!
//! This crate holds the fixed set of radio station records and the
//! read-only query surface over them:
//!
//! - **[`CatalogStore`]**: owns the stations, assigns stable ids, indexes
//!   by id and slug, populated once at startup from the embedded seed list
//! - **[`LookupService`]**: list-active, substring search and genre
//!   filtering, all side-effect-free and order-preserving
//! - **[`api`]**: the axum router exposing the lookup surface as JSON
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use aercatalog::{CatalogStore, LookupService};
//!
//! let store = CatalogStore::builtin()?;
//! let lookup = LookupService::new(Arc::new(store));
//!
//! let rock = lookup.by_genre("rock");
//! assert_eq!(rock[0].name, "Radio Nova");
//!
//! let dublin = lookup.search("dublin");
//! assert!(dublin.iter().all(|s| s.is_active));
//! # Ok::<(), aercatalog::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod lookup;
pub mod models;
pub mod openapi;
pub mod store;

// Re-exports
pub use error::{Error, Result};
pub use lookup::{LookupService, GENRE_ALL};
pub use models::{Station, StationSeed};
pub use openapi::ApiDoc;
pub use store::CatalogStore;
