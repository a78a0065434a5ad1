//! On-disk JSON snapshot of the upstream catalogue
//!
//! The snapshot is four files in one directory: `artists.json` (a bare array)
//! and `locations.json`, `dates.json`, `relations.json` (each an
//! `{ "index": [...] }` envelope), matching what the API serves.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use groupie_core::{
    Artist, ApiClient, ApiConfig, ArtistId, CatalogSource, ConfigError, DateRecord,
    DatesLocations, FetchError, Index, LocationRecord, RelationRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::Catalog;

pub const DEFAULT_UPSTREAM_URL: &str = "https://groupietrackers.herokuapp.com/api";

pub const ARTISTS_FILE: &str = "artists.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const DATES_FILE: &str = "dates.json";
pub const RELATIONS_FILE: &str = "relations.json";

const SNAPSHOT_FILES: [&str; 4] = [ARTISTS_FILE, LOCATIONS_FILE, DATES_FILE, RELATIONS_FILE];

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to fetch from upstream: {0}")]
    Fetch(#[from] FetchError),
}

/// The public Groupie Trackers API.
///
/// Same shapes as ours, except the relations collection lives at `/relation`
/// and its `datesLocations` is keyed by location. Records are turned around
/// to date -> locations on the way in.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: ApiClient,
}

impl Upstream {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let config = ApiConfig::new(base_url)?;
        Ok(Self {
            client: ApiClient::from_config(&config),
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait(?Send)]
impl CatalogSource for Upstream {
    async fn artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.client.fetch_artists().await
    }

    async fn artist(&self, id: ArtistId) -> Result<Artist, FetchError> {
        self.client.fetch_artist(id).await
    }

    async fn locations(&self) -> Result<Vec<LocationRecord>, FetchError> {
        self.client.fetch_locations().await
    }

    async fn dates(&self) -> Result<Vec<DateRecord>, FetchError> {
        self.client.fetch_dates().await
    }

    async fn relations(&self) -> Result<Vec<RelationRecord>, FetchError> {
        let records: Vec<RelationRecord> = self.client.fetch_index("/relation").await?;
        Ok(records
            .into_iter()
            .map(|record| RelationRecord {
                dates_locations: by_date(record.dates_locations),
                ..record
            })
            .collect())
    }
}

/// Invert a location -> dates mapping. Locations sharing a date are merged
/// in location key order.
fn by_date(locations_dates: DatesLocations) -> DatesLocations {
    let mut dates_locations = DatesLocations::new();
    for (location, dates) in locations_dates {
        for date in dates {
            let venues = dates_locations.entry(date).or_default();
            if !venues.contains(&location) {
                venues.push(location.clone());
            }
        }
    }
    dates_locations
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// True when all four snapshot files exist.
    pub fn is_complete(&self) -> bool {
        SNAPSHOT_FILES.iter().all(|f| self.dir.join(f).is_file())
    }

    pub fn load(&self) -> Result<Catalog, SnapshotError> {
        let artists: Vec<Artist> = self.read(ARTISTS_FILE)?;
        let locations: Index<LocationRecord> = self.read(LOCATIONS_FILE)?;
        let dates: Index<DateRecord> = self.read(DATES_FILE)?;
        let relations: Index<RelationRecord> = self.read(RELATIONS_FILE)?;

        Ok(Catalog {
            artists,
            locations: locations.index,
            dates: dates.index,
            relations: relations.index,
        })
    }

    pub fn save(&self, catalog: &Catalog) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir).map_err(|source| SnapshotError::Write {
            path: self.dir.clone(),
            source,
        })?;

        self.write(ARTISTS_FILE, &catalog.artists)?;
        self.write(LOCATIONS_FILE, &Index::from(catalog.locations.clone()))?;
        self.write(DATES_FILE, &Index::from(catalog.dates.clone()))?;
        self.write(RELATIONS_FILE, &Index::from(catalog.relations.clone()))?;

        info!("saved snapshot to {}", self.dir.display());
        Ok(())
    }

    /// Load the snapshot from disk, or fetch and save it when it is missing,
    /// incomplete, unreadable, or `refresh` is set.
    pub async fn load_or_fetch<S>(&self, source: &S, refresh: bool) -> Result<Catalog, SnapshotError>
    where
        S: CatalogSource + ?Sized,
    {
        if !refresh && self.is_complete() {
            match self.load() {
                Ok(catalog) => {
                    info!(
                        "loaded snapshot from {} ({} artists)",
                        self.dir.display(),
                        catalog.artists.len()
                    );
                    return Ok(catalog);
                }
                Err(e) => warn!("snapshot unusable, refetching: {e}"),
            }
        }

        let catalog = Catalog::fetch(source).await?;
        self.save(&catalog)?;
        Ok(catalog)
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, SnapshotError> {
        let path = self.dir.join(file);
        let content = fs::read_to_string(&path).map_err(|source| SnapshotError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse { path, source })
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), SnapshotError> {
        let path = self.dir.join(file);
        let content = serde_json::to_vec_pretty(value).map_err(|source| SnapshotError::Encode {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| SnapshotError::Write { path, source })
    }
}
