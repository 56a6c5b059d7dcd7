// crates/atlas-core/src/resolver.rs

//! # Cross-Reference Resolver
//!
//! Joins curated volcano pages with the geo dataset by volcano name.
//!
//! The two datasets are maintained independently, so names are compared on
//! their folded form (diacritics stripped, case folded, whitespace collapsed).
//! Curated records whose name has no geo counterpart are reported in
//! [`CountryMerge::unmatched_curated`] for manual curation.

use crate::alias::country_matches;
use crate::content::ContentStore;
use crate::error::Result;
use crate::geo::GeoIndex;
use crate::model::{CountryRecord, GeoFeature, MergedMarker, VolcanoRecord};
use crate::traits::NameMatch;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Output of [`merge_country_markers`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryMerge {
    /// Curated volcanoes first (source order), then geo-only ones.
    pub markers: Vec<MergedMarker>,
    /// Curated names with no matching geo feature.
    pub unmatched_curated: Vec<String>,
}

/// Merges a country's curated records with its geo features.
///
/// Every curated record appears once (the first wins on duplicate names).
/// A geo feature is appended only when no curated record shares its name.
/// Coordinates are not filtered here; see [`map_markers`].
pub fn merge_country_markers<'a, I>(curated: &[VolcanoRecord], geo: I) -> CountryMerge
where
    I: IntoIterator<Item = &'a GeoFeature>,
{
    let mut markers = Vec::with_capacity(curated.len());
    let mut curated_keys = HashSet::with_capacity(curated.len());

    for record in curated {
        if curated_keys.insert(record.name_key()) {
            markers.push(MergedMarker::from_curated(record));
        }
    }

    let mut matched = HashSet::new();
    for feature in geo {
        let key = feature.name_key();
        if curated_keys.contains(&key) {
            matched.insert(key);
        } else {
            markers.push(MergedMarker::from_geo(feature));
        }
    }

    let unmatched_curated: Vec<String> = markers
        .iter()
        .filter(|m| m.has_page && !matched.contains(&m.name_key()))
        .map(|m| m.name.clone())
        .collect();

    if !unmatched_curated.is_empty() {
        debug!(names = ?unmatched_curated, "curated volcanoes without geo match");
    }

    CountryMerge {
        markers,
        unmatched_curated,
    }
}

/// Markers that can be drawn on a map.
pub fn map_markers(markers: &[MergedMarker]) -> Vec<MergedMarker> {
    markers.iter().filter(|m| m.is_plottable()).cloned().collect()
}

/// Everything a country page needs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView {
    pub country: CountryRecord,
    pub country_name: String,
    /// List/table view: includes volcanoes without coordinates.
    pub volcanoes: Vec<MergedMarker>,
    pub map_markers: Vec<MergedMarker>,
    pub unmatched_curated: Vec<String>,
}

/// Runs the country page flow for `slug`: curated country record, its curated
/// volcanoes and the geo features of the same country, merged.
///
/// `Ok(None)` when no country page exists for `slug`.
pub fn build_country_view(
    store: &ContentStore,
    geo: &GeoIndex,
    slug: &str,
) -> Result<Option<CountryView>> {
    let Some(country) = store.get_country_by_slug(slug) else {
        return Ok(None);
    };
    let country_name = country.country_name().to_string();

    let curated: Vec<VolcanoRecord> = store
        .get_all_volcanoes()?
        .into_iter()
        .filter(|v| country_matches(&country_name, v.country()))
        .collect();
    let geo_features = geo.features_in_country(&country_name);

    let merge = merge_country_markers(&curated, geo_features.iter().copied());
    let map_markers = map_markers(&merge.markers);

    info!(
        country = %country_name,
        curated = curated.len(),
        geo = geo_features.len(),
        merged = merge.markers.len(),
        plotted = map_markers.len(),
        "country view built"
    );

    Ok(Some(CountryView {
        country,
        country_name,
        volcanoes: merge.markers,
        map_markers,
        unmatched_curated: merge.unmatched_curated,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::tests::feature;
    use serde_json::json;

    fn curated(slug: &str, name: &str, lat: f64, lon: f64) -> VolcanoRecord {
        serde_json::from_value(json!({
            "slug": slug,
            "hero": {
                "name": name,
                "country": "Japan",
                "type": "Stratovolcano",
                "status": "Active",
                "elevation_m": 3776,
                "last_eruption": "1707",
                "coordinates": { "lat": lat, "lon": lon }
            }
        }))
        .unwrap()
    }

    #[test]
    fn curated_wins_on_name_collision() {
        let curated = vec![curated("mount-fuji", "Fujisan", 35.36, 138.73)];
        let geo = vec![
            feature("Fujisan", "Japan", 35.3606, 138.7274),
            feature("Aso", "Japan", 32.88, 131.1),
        ];

        let merge = merge_country_markers(&curated, &geo);
        let fuji: Vec<_> = merge.markers.iter().filter(|m| m.name == "Fujisan").collect();
        assert_eq!(fuji.len(), 1);
        assert!(fuji[0].has_page);
        assert_eq!(fuji[0].slug.as_deref(), Some("mount-fuji"));

        let aso = &merge.markers[1];
        assert!(!aso.has_page);
        assert_eq!(aso.slug, None);
        assert_eq!(aso.status, "Recently Active");
        assert_eq!(aso.href(), "/volcano/aso");
        assert!(merge.unmatched_curated.is_empty());
    }

    #[test]
    fn names_are_folded_before_matching() {
        let curated = vec![curated("kilauea", "Kīlauea", 19.4, -155.3)];
        let geo = vec![feature("kilauea ", "United States", 19.421, -155.287)];

        let merge = merge_country_markers(&curated, &geo);
        assert_eq!(merge.markers.len(), 1);
        assert!(merge.unmatched_curated.is_empty());
    }

    #[test]
    fn merged_size_is_bounded() {
        let curated = vec![
            curated("a", "Alpha", 1.0, 1.0),
            curated("b", "Beta", 2.0, 2.0),
            curated("a-dup", "alpha", 3.0, 3.0),
        ];
        let geo = vec![
            feature("Beta", "Japan", 2.0, 2.0),
            feature("Gamma", "Japan", 3.0, 3.0),
        ];
        let merge = merge_country_markers(&curated, &geo);

        let n = 2; // distinct curated names
        let m = geo.len();
        assert!(merge.markers.len() >= n.max(m));
        assert!(merge.markers.len() <= n + m);
        assert_eq!(merge.unmatched_curated, vec!["Alpha"]);
    }

    #[test]
    fn map_markers_drop_missing_or_zero_coordinates() {
        let mut no_coords = feature("Hidden", "Japan", 0.0, 0.0);
        no_coords.latitude = None;
        let geo = vec![
            feature("Zero", "Japan", 0.0, 0.0),
            no_coords,
            feature("Shown", "Japan", 10.0, 20.0),
        ];
        let merge = merge_country_markers(&[], &geo);
        assert_eq!(merge.markers.len(), 3);

        let plotted = map_markers(&merge.markers);
        assert_eq!(plotted.len(), 1);
        assert_eq!(plotted[0].name, "Shown");
    }
}
