//! Fixtures
//!
//! Catalog and location data loaded from YAML, either from disk or from the
//! copies embedded in the crate.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    fixtures::{catalog::CatalogFixture, locations::LocationsFixture},
    locations::LocationTable,
};

pub mod catalog;
pub mod locations;

const DEFAULT_CATALOG: &str = include_str!("../../fixtures/catalog.yml");
const DEFAULT_LOCATIONS: &str = include_str!("../../fixtures/locations.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Catalog rejected the fixture products
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Location fixture has no countries
    #[error("Location fixture has no countries")]
    NoCountries,
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from `<base>/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if two products share a code.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let contents = fs::read_to_string(self.base_path.join(format!("{name}.yml")))?;

        parse_catalog(&contents)
    }

    /// Load a location table from `<base>/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or lists no countries.
    pub fn load_locations(&self, name: &str) -> Result<LocationTable, FixtureError> {
        let contents = fs::read_to_string(self.base_path.join(format!("{name}.yml")))?;

        parse_locations(&contents)
    }
}

/// Catalog embedded in the crate.
///
/// # Errors
///
/// Returns an error if the embedded YAML is malformed.
pub fn default_catalog() -> Result<Catalog, FixtureError> {
    parse_catalog(DEFAULT_CATALOG)
}

/// Location table embedded in the crate.
///
/// # Errors
///
/// Returns an error if the embedded YAML is malformed.
pub fn default_locations() -> Result<LocationTable, FixtureError> {
    parse_locations(DEFAULT_LOCATIONS)
}

fn parse_catalog(contents: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(contents)?;

    Ok(Catalog::try_from(fixture)?)
}

fn parse_locations(contents: &str) -> Result<LocationTable, FixtureError> {
    let fixture: LocationsFixture = serde_norway::from_str(contents)?;

    LocationTable::try_from(fixture)
}
