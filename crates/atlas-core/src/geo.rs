// crates/atlas-core/src/geo.rs

//! # Geo Dataset Index
//!
//! In-memory view over the ~1,300 point features of `volcanoes.json`.
//! Loading lives in [`crate::loader`]; this module only answers queries.
//!
//! Name lookups are case-insensitive exact matches (no transliteration, no
//! fuzzy matching). Country lookups are case-insensitive and honour the
//! alias table in [`crate::alias`].

use crate::alias::country_matches;
use crate::common::DatasetStats;
use crate::model::{Coordinates, CountryVolcano, GeoFeature, GeoMarker};
use crate::traits::NameMatch;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct GeoIndex {
    features: Vec<GeoFeature>,
    /// Lowercased name -> position of its first occurrence.
    by_name: HashMap<String, usize>,
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl GeoIndex {
    pub fn from_features(features: Vec<GeoFeature>) -> Self {
        let mut by_name = HashMap::with_capacity(features.len());
        for (i, f) in features.iter().enumerate() {
            by_name.entry(name_key(&f.name)).or_insert(i);
        }
        Self { features, by_name }
    }

    /// All features, in dataset order.
    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        let countries: HashSet<String> = self
            .features
            .iter()
            .map(|f| f.country.to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        DatasetStats {
            volcanoes: self.features.len(),
            countries: countries.len(),
            with_coordinates: self
                .features
                .iter()
                .filter(|f| f.coordinates().is_some())
                .count(),
            with_known_eruption: self
                .features
                .iter()
                .filter(|f| f.last_eruption_year.is_some())
                .count(),
        }
    }

    /// Feature whose name equals `name` ignoring case; the first one wins when
    /// the dataset repeats a name.
    pub fn find_by_name(&self, name: &str) -> Option<&GeoFeature> {
        self.by_name
            .get(&name_key(name))
            .map(|&i| &self.features[i])
    }

    /// Coordinates for every feature whose name matches one of `names`
    /// (ignoring case), keyed by the dataset's own spelling. Names absent
    /// from the dataset, and features without coordinates, are omitted.
    pub fn coordinates_by_names<S: AsRef<str>>(&self, names: &[S]) -> HashMap<String, Coordinates> {
        let wanted: HashSet<String> = names.iter().map(|n| name_key(n.as_ref())).collect();
        let mut out = HashMap::new();
        for f in &self.features {
            if !wanted.contains(&name_key(&f.name)) {
                continue;
            }
            if let Some(coords) = f.coordinates() {
                out.insert(f.name.clone(), coords);
            }
        }
        out
    }

    /// Features located in `country`, in dataset order.
    pub fn features_in_country(&self, country: &str) -> Vec<&GeoFeature> {
        self.features
            .iter()
            .filter(|f| country_matches(country, &f.country))
            .collect()
    }

    /// Simplified records for a country's volcanoes.
    pub fn volcanoes_by_country(&self, country: &str) -> Vec<CountryVolcano> {
        self.features_in_country(country)
            .into_iter()
            .map(GeoFeature::to_country_volcano)
            .collect()
    }

    /// One marker per feature, for world maps.
    pub fn all_markers(&self) -> Vec<GeoMarker> {
        self.features
            .iter()
            .map(|f| GeoMarker {
                name: f.name.clone(),
                lat: f.latitude,
                lon: f.longitude,
                country: f.country.clone(),
                elevation: f.elevation,
                volcano_type: f.volcano_type().to_string(),
                last_eruption: f.last_eruption_year,
            })
            .collect()
    }

    /// Features whose folded name contains the folded `query`.
    pub fn find_by_substring(&self, query: &str) -> Vec<&GeoFeature> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.features
            .iter()
            .filter(|f| f.name_contains(query))
            .collect()
    }
}
