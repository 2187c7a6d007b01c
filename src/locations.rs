//! Locations
//!
//! Reference table used to cascade country, state and city choices on the
//! customer record.

use serde::{Deserialize, Serialize};

/// A country and its states, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country name
    pub name: String,

    /// States (or departments) belonging to the country
    pub states: Vec<State>,
}

/// A state and its cities, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// State name
    pub name: String,

    /// Cities belonging to the state
    pub cities: Vec<String>,
}

/// Static country -> state -> city reference table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationTable {
    countries: Vec<Country>,
}

impl LocationTable {
    /// Create a table from the given countries.
    pub fn new(countries: impl Into<Vec<Country>>) -> Self {
        Self {
            countries: countries.into(),
        }
    }

    /// Country names, in display order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|country| country.name.as_str())
    }

    /// Look up a country by name.
    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.name == name)
    }

    /// States of `country`. Yields nothing when the country is unset or unknown.
    pub fn states<'a>(&'a self, country: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.country(country)
            .into_iter()
            .flat_map(|country| country.states.iter().map(|state| state.name.as_str()))
    }

    /// Cities of `state` within `country`. Empty when either is unset or unknown.
    pub fn cities(&self, country: &str, state: &str) -> &[String] {
        self.country(country)
            .and_then(|country| country.states.iter().find(|s| s.name == state))
            .map_or(&[], |state| state.cities.as_slice())
    }

    /// Whether the `country`/`state`/`city` triple exists in the table.
    pub fn contains(&self, country: &str, state: &str, city: &str) -> bool {
        self.cities(country, state).iter().any(|c| c == city)
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the table has no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LocationTable {
        LocationTable::new([
            Country {
                name: "Colombia".to_string(),
                states: vec![
                    State {
                        name: "Antioquia".to_string(),
                        cities: vec!["Medellín".to_string(), "Bello".to_string()],
                    },
                    State {
                        name: "Huila".to_string(),
                        cities: vec!["Neiva".to_string()],
                    },
                ],
            },
            Country {
                name: "El Salvador".to_string(),
                states: vec![State {
                    name: "La Paz".to_string(),
                    cities: vec!["Zacatecoluca".to_string()],
                }],
            },
        ])
    }

    #[test]
    fn states_follow_display_order() {
        let table = table();

        let states: Vec<_> = table.states("Colombia").collect();

        assert_eq!(states, ["Antioquia", "Huila"]);
    }

    #[test]
    fn states_of_unknown_or_unset_country_are_empty() {
        let table = table();

        assert_eq!(table.states("Peru").count(), 0);
        assert_eq!(table.states("").count(), 0);
    }

    #[test]
    fn cities_require_country_and_state() {
        let table = table();

        assert_eq!(table.cities("Colombia", "Antioquia"), ["Medellín", "Bello"]);
        assert!(table.cities("Colombia", "").is_empty());
        assert!(table.cities("", "Antioquia").is_empty());
        assert!(table.cities("El Salvador", "Antioquia").is_empty());
    }

    #[test]
    fn contains_checks_the_whole_chain() {
        let table = table();

        assert!(table.contains("Colombia", "Huila", "Neiva"));
        assert!(!table.contains("Colombia", "Antioquia", "Neiva"));
    }

    #[test]
    fn countries_and_len() {
        let table = table();

        assert_eq!(table.countries().collect::<Vec<_>>(), ["Colombia", "El Salvador"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(LocationTable::default().is_empty());
    }
}
