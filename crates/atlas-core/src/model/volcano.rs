// crates/atlas-core/src/model/volcano.rs
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// False for the `0/0` placeholder and non-finite values; such points are
    /// listed but never drawn on a map.
    pub fn is_plottable(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.lat != 0.0 && self.lon != 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedVolcano {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "type", default)]
    pub volcano_type: String,
}

/// Header block of a curated volcano page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VolcanoHero {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub volcano_type: String,
    // Kept as JSON numbers so integers are written back as integers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_ft: Option<Number>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Free text: "2023", "1707 CE", "Unknown", ...
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_eruption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A curated volcano page (`volcano-<slug>.json`).
///
/// Prose blocks stay as raw JSON; fields this crate does not model are kept
/// in `extra`, so reading and re-serializing a file loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoRecord {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volcano_id: Option<Number>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_answer: Option<Value>,
    pub hero: VolcanoHero,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_facts_box: Option<Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub sections: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_tables: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eruption_timeline: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vei_distribution: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_volcanoes: Option<Vec<RelatedVolcano>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VolcanoRecord {
    pub fn name(&self) -> &str {
        &self.hero.name
    }

    pub fn country(&self) -> &str {
        &self.hero.country
    }

    pub fn region(&self) -> &str {
        &self.hero.region
    }

    pub fn volcano_type(&self) -> &str {
        &self.hero.volcano_type
    }

    pub fn status(&self) -> &str {
        &self.hero.status
    }

    pub fn last_eruption(&self) -> &str {
        &self.hero.last_eruption
    }

    pub fn elevation_m(&self) -> Option<f64> {
        self.hero.elevation_m.as_ref().and_then(Number::as_f64)
    }

    pub fn elevation_ft(&self) -> Option<f64> {
        self.hero.elevation_ft.as_ref().and_then(Number::as_f64)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.hero.coordinates
    }

    /// Site path of the page (`/volcano/<slug>`).
    pub fn path(&self) -> String {
        format!("/volcano/{}", self.slug)
    }
}

impl NameMatch for VolcanoRecord {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_sparse_record_and_keeps_unknown_fields() {
        let raw = json!({
            "slug": "fuji",
            "title": "Mount Fuji",
            "hero": {
                "name": "Fujisan",
                "country": "Japan",
                "type": "Stratovolcano",
                "elevation_m": 3776,
                "coordinates": { "lat": 35.3606, "lon": 138.7274 },
                "badge": "iconic"
            },
            "sections": { "overview": { "title": "Overview" } },
            "breadcrumbs": ["Home", "Japan"]
        });

        let record: VolcanoRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.name(), "Fujisan");
        assert_eq!(record.elevation_m(), Some(3776.0));
        assert_eq!(record.path(), "/volcano/fuji");
        assert!(record.extra.contains_key("breadcrumbs"));
        assert!(record.hero.extra.contains_key("badge"));

        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn zero_coordinates_are_not_plottable() {
        assert!(!Coordinates::new(0.0, 0.0).is_plottable());
        assert!(!Coordinates::new(19.4, 0.0).is_plottable());
        assert!(Coordinates::new(19.421, -155.287).is_plottable());
    }
}
