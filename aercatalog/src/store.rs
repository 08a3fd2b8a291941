//! In-memory catalog store
//!
//! The store owns the station records in insertion order and keeps id and
//! slug indexes. Stations are immutable once inserted; the catalog is
//! normally populated once at startup from the embedded seed list and then
//! shared read-only behind an `Arc`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{normalize_optional, Station, StationSeed};

/// Embedded seed catalog (the 23-station Irish line-up)
const BUILTIN_STATIONS: &str = include_str!("stations.yaml");

/// Fixed catalog of radio stations, indexed by id and slug
#[derive(Debug, Default)]
pub struct CatalogStore {
    /// Stations in insertion order
    stations: Vec<Station>,
    /// id -> index into `stations`
    by_id: HashMap<u32, usize>,
    /// slug -> index into `stations`
    by_slug: HashMap<String, usize>,
    /// Next id to assign; ids are never reused
    next_id: u32,
}

impl CatalogStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            by_id: HashMap::new(),
            by_slug: HashMap::new(),
            next_id: 1,
        }
    }

    /// Builds a store from a YAML seed list
    pub fn from_seed(yaml: &str) -> Result<Self> {
        let seeds: Vec<StationSeed> = serde_yaml::from_str(yaml)?;
        let mut store = Self::new();
        for seed in seeds {
            store.add_station(seed)?;
        }
        debug!(stations = store.len(), "Catalog seeded");
        Ok(store)
    }

    /// Builds a store from the embedded seed catalog
    pub fn builtin() -> Result<Self> {
        Self::from_seed(BUILTIN_STATIONS)
    }

    /// Inserts a station, assigning the next unused id
    ///
    /// Fails with [`Error::DuplicateSlug`] if the slug is already taken and
    /// with [`Error::InvalidStation`] on a blank name, slug or stream URL.
    /// The catalog is unchanged on failure.
    pub fn add_station(&mut self, seed: StationSeed) -> Result<Station> {
        let name = seed.name.trim().to_string();
        let slug = seed.slug.trim().to_string();
        let stream_url = seed.stream_url.trim().to_string();

        if name.is_empty() {
            return Err(Error::InvalidStation("name must not be empty".into()));
        }
        if slug.is_empty() {
            return Err(Error::InvalidStation("slug must not be empty".into()));
        }
        if stream_url.is_empty() {
            return Err(Error::InvalidStation(format!(
                "station {name} has no stream URL"
            )));
        }
        if self.by_slug.contains_key(&slug) {
            return Err(Error::DuplicateSlug(slug));
        }

        let id = self.next_id;
        self.next_id += 1;

        let station = Station {
            id,
            name,
            slug: slug.clone(),
            frequency: normalize_optional(seed.frequency),
            description: normalize_optional(seed.description),
            stream_url,
            logo_url: normalize_optional(seed.logo_url),
            website: normalize_optional(seed.website),
            genre: normalize_optional(seed.genre),
            location: normalize_optional(seed.location),
            is_active: seed.is_active.unwrap_or(true),
            gradient_from: seed.gradient_from,
            gradient_to: seed.gradient_to,
        };

        let index = self.stations.len();
        self.by_id.insert(id, index);
        self.by_slug.insert(slug, index);
        self.stations.push(station);

        Ok(self.stations[index].clone())
    }

    /// Looks up a station by id (inactive stations included)
    pub fn get_by_id(&self, id: u32) -> Option<&Station> {
        self.by_id.get(&id).map(|&i| &self.stations[i])
    }

    /// Looks up a station by slug (inactive stations included)
    pub fn get_by_slug(&self, slug: &str) -> Option<&Station> {
        self.by_slug.get(slug).map(|&i| &self.stations[i])
    }

    /// All stations in insertion order, active or not
    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
