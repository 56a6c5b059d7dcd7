// crates/atlas-core/src/model/site.rs

//! Site-wide files living directly in the data directory.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
}

/// `volcanoatlas-nav.json`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavData {
    #[serde(default)]
    pub featured_volcanoes: Vec<NavLink>,
    #[serde(default)]
    pub countries: Vec<NavLink>,
    #[serde(default)]
    pub special_pages: Vec<NavLink>,
    #[serde(default)]
    pub rankings: Vec<NavLink>,
}

/// One entry of `volcanoatlas-seo.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoEntry {
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
}

/// Homepage map marker; also produced from curated pages by
/// [`ContentStore::get_map_markers`](crate::content::ContentStore::get_map_markers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub title: String,
    pub slug: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub volcano_type: String,
    pub elevation: String,
    pub country: String,
    pub last_eruption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `volcanoatlas-homepage.json`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomepageData {
    #[serde(default)]
    pub total_volcanoes_covered: u32,
    #[serde(default)]
    pub total_countries: u32,
    #[serde(default)]
    pub map_markers: Vec<MapMarker>,
}

/// Sitemap priorities appear both as `"0.8"` and `0.8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    Number(f64),
    Text(String),
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers keep one decimal (`1.0`), others print as read.
            Priority::Number(p) if p.fract() == 0.0 => write!(f, "{p:.1}"),
            Priority::Number(p) => write!(f, "{p}"),
            Priority::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// One entry of `volcanoatlas-sitemap.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}
