// src/domain/location.rs

use serde::{Deserialize, Serialize};

/// The "no restriction" value of the city selector.
pub const ALL_CITIES: &str = "All Cities";
/// The "no restriction" value of the area selector.
pub const ALL_AREAS: &str = "All Areas";

/// A city and the areas sponsors in it can be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub areas: Vec<String>,
}

/// Two-level city → areas lookup used by the location selectors.
///
/// Membership is advisory: the sponsor store accepts any city/area pair and
/// only warns about pairs this catalog doesn't know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCatalog {
    cities: Vec<City>,
}

impl LocationCatalog {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// City names in catalog order, without the "All Cities" entry.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|c| c.name.as_str())
    }

    /// Selector options for the city dropdown: "All Cities" first.
    pub fn city_options(&self) -> Vec<&str> {
        std::iter::once(ALL_CITIES).chain(self.cities()).collect()
    }

    /// Selector options for the area dropdown given the selected city.
    /// Always starts with "All Areas"; an unknown or default city yields only that.
    pub fn areas_for(&self, city: &str) -> Vec<&str> {
        let areas = self
            .cities
            .iter()
            .find(|c| c.name == city)
            .map(|c| c.areas.as_slice())
            .unwrap_or_default();

        std::iter::once(ALL_AREAS)
            .chain(areas.iter().map(String::as_str))
            .collect()
    }

    pub fn is_valid_area(&self, city: &str, area: &str) -> bool {
        self.cities
            .iter()
            .find(|c| c.name == city)
            .is_some_and(|c| c.areas.iter().any(|a| a == area))
    }
}
