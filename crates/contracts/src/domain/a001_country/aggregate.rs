use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sovereign country as listed by the upstream statistics API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Short code used in upstream requests (e.g. "AFG")
    pub id: String,
    /// Display name, unique within a catalog
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Country {
    /// Coordinates for the map view, only when both are known
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Countries keyed by display name.
///
/// Inserting a name that is already present replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryCatalog {
    countries: BTreeMap<String, Country>,
}

impl CountryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: Country) {
        self.countries.insert(country.name.clone(), country);
    }

    pub fn get(&self, name: &str) -> Option<&Country> {
        self.countries.get(name)
    }

    /// Names in alphabetical order
    pub fn names(&self) -> Vec<String> {
        self.countries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl FromIterator<Country> for CountryCatalog {
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for country in iter {
            catalog.insert(country);
        }
        catalog
    }
}

/// Marker for the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPointsRequest {
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryListResponse {
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(id: &str, name: &str) -> Country {
        Country {
            id: id.to_string(),
            name: name.to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_later_duplicate_name_replaces_earlier() {
        let catalog: CountryCatalog = vec![
            country("AAA", "Somewhere"),
            country("FRA", "France"),
            country("BBB", "Somewhere"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Somewhere").map(|c| c.id.as_str()), Some("BBB"));
    }

    #[test]
    fn test_names_are_sorted() {
        let catalog: CountryCatalog = vec![country("FRA", "France"), country("AFG", "Afghanistan")]
            .into_iter()
            .collect();
        assert_eq!(catalog.names(), vec!["Afghanistan", "France"]);
    }

    #[test]
    fn test_coordinates_need_both_axes() {
        let mut c = country("FRA", "France");
        c.latitude = Some(48.8566);
        assert_eq!(c.coordinates(), None);
        c.longitude = Some(2.35097);
        assert_eq!(c.coordinates(), Some((48.8566, 2.35097)));
    }
}
