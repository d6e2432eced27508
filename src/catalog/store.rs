use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::VenueId;
use crate::core::venue::{Venue, VenueError};

/// File name looked up next to the executable when no data path is given
pub const DEFAULT_DATA_FILE: &str = "venues.json";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read venue data {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse venue data: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Venue data must be a JSON array of objects")]
    NotAnArray,

    #[error("Invalid venue record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: VenueError,
    },

    #[error("Failed to locate the running executable: {0}")]
    ExecutableLocation(#[source] std::io::Error),
}

/// Default data file: `venues.json` in the directory holding the executable
///
/// # Errors
///
/// Returns an error if the path of the running executable cannot be determined.
pub fn default_data_path() -> Result<PathBuf, CatalogError> {
    let exe = std::env::current_exe().map_err(CatalogError::ExecutableLocation)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_DATA_FILE))
}

/// The immutable in-memory venue catalog
///
/// Venues keep the order they had in the data file. Lookups are a linear scan
/// and the first record with a matching id wins.
#[derive(Debug, Clone, Default)]
pub struct VenueCatalog {
    venues: Vec<Venue>,
}

impl VenueCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-validated venues, keeping their order
    pub fn from_venues(venues: Vec<Venue>) -> Self {
        let catalog = Self { venues };
        catalog.warn_on_duplicates();
        catalog
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// array of venue records.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), venues = catalog.len(), "Loaded venue data");
        Ok(catalog)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON, the top-level value is not an
    /// array, or any element is not an object with a non-empty string `id`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
            return Err(CatalogError::NotAnArray);
        };

        let venues = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Venue::from_value(record)
                    .map_err(|source| CatalogError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_venues(venues))
    }

    /// All venues, in data file order
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Get the first venue whose id equals `id` exactly
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id() == id)
    }

    /// Ids that appear on more than one record, each listed once in order of
    /// first repeat
    pub fn duplicate_ids(&self) -> Vec<&VenueId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.venues
            .iter()
            .map(Venue::id)
            .filter(|id| !seen.insert(*id) && reported.insert(*id))
            .collect()
    }

    /// Number of venues in catalog
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    fn warn_on_duplicates(&self) {
        for id in self.duplicate_ids() {
            tracing::warn!(%id, "Duplicate venue id in data; lookups return the first record");
        }
    }
}
