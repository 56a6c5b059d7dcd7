// crates/atlas-core/src/fallback.rs

//! # Volcano Page Resolution
//!
//! A `/volcano/<slug>` request is served from the curated page when one
//! exists. Otherwise the slug is turned back into a name (`-` -> space) and
//! looked up in the geo dataset; a hit yields a minimal dynamic page, a miss
//! is a 404.

use crate::content::ContentStore;
use crate::eruptions::{estimate_eruptions, seed_for, Eruption};
use crate::geo::GeoIndex;
use crate::model::{Coordinates, GeoFeature, VolcanoRecord};
use crate::text::{format_elevation, slug_to_name};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Column of the ranking table holding the volcano name.
const NAME_COL: usize = 0;
const TOTAL_ERUPTIONS_COL: usize = 6;
const MAX_VEI_COL: usize = 7;

/// Eruption statistics from the ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolcanoStats {
    pub total_eruptions: Option<u32>,
    pub max_vei: Option<u32>,
}

/// Page synthesized from a geo feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicVolcano {
    pub slug: String,
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub subregion: Option<String>,
    #[serde(rename = "type")]
    pub volcano_type: String,
    pub status: String,
    pub elevation_m: Option<f64>,
    /// `"3,776 m (12,388 ft)"`.
    pub elevation_label: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub last_eruption_year: Option<i32>,
    pub landform: Option<String>,
    pub geological_summary: Option<String>,
    pub tectonic_setting: Option<String>,
    pub rock_type: Option<String>,
    pub total_eruptions: Option<u32>,
    pub max_vei: Option<u32>,
    /// Newest first. Empty when there is not enough data.
    pub eruptions: Vec<Eruption>,
}

impl DynamicVolcano {
    pub fn from_feature(slug: &str, feature: &GeoFeature, stats: VolcanoStats) -> Self {
        let eruptions = estimate_eruptions(
            &feature.name,
            feature.last_eruption_year,
            stats.total_eruptions,
            seed_for(slug),
        );
        Self {
            slug: slug.to_string(),
            name: feature.name.clone(),
            country: feature.country.clone(),
            region: feature.region.clone(),
            subregion: feature.subregion.clone(),
            volcano_type: feature.volcano_type().to_string(),
            status: feature.activity_status().to_string(),
            elevation_m: feature.elevation,
            elevation_label: feature.elevation.map(format_elevation),
            coordinates: feature.coordinates(),
            last_eruption_year: feature.last_eruption_year,
            landform: feature.landform.clone(),
            geological_summary: feature.geological_summary.clone(),
            tectonic_setting: feature.tectonic_setting.clone(),
            rock_type: feature.rock_type.clone(),
            total_eruptions: stats.total_eruptions,
            max_vei: stats.max_vei,
            eruptions,
        }
    }

    /// True when at least one timeline entry was generated rather than known.
    pub fn has_estimated_eruptions(&self) -> bool {
        self.eruptions.iter().any(|e| e.estimated)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VolcanoPage {
    Full(Box<VolcanoRecord>),
    Dynamic(Box<DynamicVolcano>),
    NotFound,
}

impl VolcanoPage {
    pub fn is_found(&self) -> bool {
        !matches!(self, VolcanoPage::NotFound)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            VolcanoPage::Full(v) => Some(v.name()),
            VolcanoPage::Dynamic(d) => Some(&d.name),
            VolcanoPage::NotFound => None,
        }
    }
}

/// Curated page, else dynamic page from the geo dataset, else `NotFound`.
pub fn resolve_volcano_page(store: &ContentStore, geo: &GeoIndex, slug: &str) -> VolcanoPage {
    if let Some(record) = store.get_volcano_by_slug(slug) {
        return VolcanoPage::Full(Box::new(record));
    }

    let name = slug_to_name(slug);
    let Some(feature) = geo.find_by_name(&name) else {
        debug!(slug, name = %name, "no curated page and no geo match");
        return VolcanoPage::NotFound;
    };

    let stats = volcano_stats(store, &feature.name).unwrap_or_default();
    debug!(slug, name = %feature.name, ?stats, "serving dynamic volcano page");
    VolcanoPage::Dynamic(Box::new(DynamicVolcano::from_feature(slug, feature, stats)))
}

/// Row for `name` (case-insensitive) in the ranking table of the store's
/// stats page. Zero counts are treated as unknown.
pub fn volcano_stats(store: &ContentStore, name: &str) -> Option<VolcanoStats> {
    let Some(page) = store.get_ranking_page(store.stats_slug()) else {
        warn!(slug = store.stats_slug(), "eruption statistics page unavailable");
        return None;
    };
    let table = page.ranked_table?;
    let wanted = name.trim().to_lowercase();

    let row = table.rows.iter().find(|row| {
        row.get(NAME_COL)
            .and_then(Value::as_str)
            .is_some_and(|n| n.trim().to_lowercase() == wanted)
    })?;

    Some(VolcanoStats {
        total_eruptions: row.get(TOTAL_ERUPTIONS_COL).and_then(cell_count),
        max_vei: row.get(MAX_VEI_COL).and_then(cell_count),
    })
}

/// Positive integer from a number or numeric string cell.
fn cell_count(v: &Value) -> Option<u32> {
    let n = match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f as u64)),
        Value::String(s) => s.trim().replace(',', "").parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(n).ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::tests::feature;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (ContentStore, GeoIndex, TempDir) {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("volcano-etna.json"),
            json!({ "slug": "etna", "hero": { "name": "Etna", "country": "Italy" } }).to_string(),
        )
        .unwrap();
        fs::write(
            content.join("ranking-active-volcanoes.json"),
            json!({
                "slug": "active-volcanoes",
                "page_type": "ranking",
                "ranked_table": {
                    "headers": ["Volcano", "Country", "", "", "", "", "Eruptions", "Max VEI"],
                    "rows": [
                        ["Mount Example", "Testland", "", "", "", "", 12, "4"],
                        ["Quiet Peak", "Testland", "", "", "", "", 0, 0]
                    ]
                }
            })
            .to_string(),
        )
        .unwrap();

        let geo = GeoIndex::from_features(vec![
            feature("Mount Example", "Testland", 10.0, 20.0),
            feature("Quiet Peak", "Testland", 11.0, 21.0),
            feature("Etna", "Italy", 37.748, 14.999),
        ]);
        (ContentStore::new(dir.path(), content), geo, dir)
    }

    #[test]
    fn curated_page_wins() {
        let (store, geo, _dir) = setup();
        match resolve_volcano_page(&store, &geo, "etna") {
            VolcanoPage::Full(v) => assert_eq!(v.slug, "etna"),
            other => panic!("expected curated page, got {other:?}"),
        }
    }

    #[test]
    fn dynamic_page_from_geo_match() {
        let (store, geo, _dir) = setup();
        let VolcanoPage::Dynamic(page) = resolve_volcano_page(&store, &geo, "mount-example") else {
            panic!("expected dynamic page");
        };
        assert_eq!(page.name, "Mount Example");
        assert_eq!(page.total_eruptions, Some(12));
        assert_eq!(page.max_vei, Some(4));
        assert_eq!(page.elevation_label.as_deref(), Some("1,000 m (3,281 ft)"));
        assert_eq!(page.eruptions[0].year, 1950);
        assert!(page.has_estimated_eruptions());

        // Deterministic per slug.
        let again = resolve_volcano_page(&store, &geo, "mount-example");
        assert_eq!(again, VolcanoPage::Dynamic(page));
    }

    #[test]
    fn zero_stats_are_absent() {
        let (store, geo, _dir) = setup();
        assert_eq!(
            volcano_stats(&store, "quiet peak"),
            Some(VolcanoStats::default())
        );
        assert_eq!(volcano_stats(&store, "Nowhere"), None);

        let VolcanoPage::Dynamic(page) = resolve_volcano_page(&store, &geo, "quiet-peak") else {
            panic!("expected dynamic page");
        };
        assert!(page.eruptions.is_empty());
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let (store, geo, _dir) = setup();
        assert_eq!(
            resolve_volcano_page(&store, &geo, "atlantis"),
            VolcanoPage::NotFound
        );
        assert!(!VolcanoPage::NotFound.is_found());
    }

    #[test]
    fn missing_stats_page_is_none() {
        let (store, _geo, _dir) = setup();
        let store = store.with_stats_slug("no-such-ranking");
        assert_eq!(volcano_stats(&store, "Mount Example"), None);
    }
}
