//! Location Fixtures

use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    locations::{Country, LocationTable},
};

/// Wrapper for the country tree in YAML
#[derive(Debug, Deserialize)]
pub struct LocationsFixture {
    /// Countries with their states and cities
    pub countries: Vec<Country>,
}

impl TryFrom<LocationsFixture> for LocationTable {
    type Error = FixtureError;

    fn try_from(fixture: LocationsFixture) -> Result<Self, Self::Error> {
        if fixture.countries.is_empty() {
            return Err(FixtureError::NoCountries);
        }

        Ok(LocationTable::new(fixture.countries))
    }
}
