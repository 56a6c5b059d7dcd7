// crates/atlas-core/src/model/marker.rs
use super::geo::GeoFeature;
use super::volcano::{Coordinates, VolcanoRecord};
use crate::text::{group_thousands, slugify};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// Display shape unifying a curated page and a raw geo point.
///
/// Derived on demand by the cross-reference resolver; never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedMarker {
    pub name: String,
    /// Curated page slug; `None` for geo-only volcanoes.
    pub slug: Option<String>,
    pub has_page: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub country: String,
    #[serde(rename = "type")]
    pub volcano_type: String,
    pub status: String,
    pub elevation: String,
    pub last_eruption: String,
}

impl MergedMarker {
    pub fn from_curated(v: &VolcanoRecord) -> Self {
        let coords = v.coordinates();
        Self {
            name: v.name().to_string(),
            slug: Some(v.slug.clone()),
            has_page: true,
            lat: coords.map(|c| c.lat),
            lon: coords.map(|c| c.lon),
            country: v.country().to_string(),
            volcano_type: v.volcano_type().to_string(),
            status: v.status().to_string(),
            elevation: v
                .elevation_m()
                .map(|m| format!("{}m", m.round() as i64))
                .unwrap_or_else(|| "Unknown".to_string()),
            last_eruption: v.last_eruption().to_string(),
        }
    }

    pub fn from_geo(g: &GeoFeature) -> Self {
        Self {
            name: g.name.clone(),
            slug: None,
            has_page: false,
            lat: g.latitude,
            lon: g.longitude,
            country: g.country.clone(),
            volcano_type: g.volcano_type().to_string(),
            status: g.activity_status().to_string(),
            elevation: g
                .elevation
                .map(|m| format!("{}m", m.round() as i64))
                .unwrap_or_else(|| "Unknown".to_string()),
            last_eruption: g
                .last_eruption_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// True when the marker can be drawn (both coordinates present, non-zero).
    pub fn is_plottable(&self) -> bool {
        self.coordinates().is_some_and(|c| c.is_plottable())
    }

    /// Page link. Geo-only volcanoes link to the fallback route built from
    /// their name.
    pub fn href(&self) -> String {
        match &self.slug {
            Some(slug) => format!("/volcano/{slug}"),
            None => format!("/volcano/{}", slugify(&self.name)),
        }
    }

    /// Elevation with thousands separators, for table cells.
    pub fn elevation_label(&self) -> String {
        self.elevation
            .strip_suffix('m')
            .and_then(|n| n.parse::<i64>().ok())
            .map(|n| format!("{} m", group_thousands(n)))
            .unwrap_or_else(|| self.elevation.clone())
    }
}

impl NameMatch for MergedMarker {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}
