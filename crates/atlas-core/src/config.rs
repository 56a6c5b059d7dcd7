// crates/atlas-core/src/config.rs

//! Where the data lives and which feeds to poll.
//!
//! Defaults mirror the site layout (`data/`, `data/content/`,
//! `volcanoes.json` relative to the working directory). Environment
//! variables override the defaults; the CLI overrides both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ALERTS_URL: &str =
    "https://volcanoes.usgs.gov/hans-public/api/volcano/getElevatedVolcanoes";
pub const DEFAULT_WEEKLY_URL: &str = "https://volcano.si.edu/news/WeeklyVolcanoRSS.xml";
pub const DEFAULT_BASE_URL: &str = "https://www.volcanosatlas.com";

/// Ranking page whose table carries per-volcano eruption counts and max VEI.
pub const DEFAULT_STATS_SLUG: &str = "active-volcanoes";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub alerts_url: String,
    pub weekly_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            alerts_url: DEFAULT_ALERTS_URL.to_string(),
            weekly_url: DEFAULT_WEEKLY_URL.to_string(),
            timeout_secs: 10,
            user_agent: concat!("volcano-atlas/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Site-level JSON files (`volcanoatlas-nav.json`, ...).
    pub data_dir: PathBuf,
    /// Per-page content files (`volcano-<slug>.json`, ...).
    pub content_dir: PathBuf,
    /// The GeoJSON-like feature collection (`volcanoes.json`).
    pub geo_path: PathBuf,
    pub stats_slug: String,
    pub site_base_url: String,
    pub feeds: FeedConfig,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self::with_data_dir("data")
    }
}

impl AtlasConfig {
    /// Defaults with `content_dir` placed under the given data directory.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            content_dir: data_dir.join("content"),
            data_dir,
            geo_path: PathBuf::from("volcanoes.json"),
            stats_slug: DEFAULT_STATS_SLUG.to_string(),
            site_base_url: DEFAULT_BASE_URL.to_string(),
            feeds: FeedConfig::default(),
        }
    }

    /// Defaults overridden by `VOLCANO_ATLAS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = match get("VOLCANO_ATLAS_DATA_DIR") {
            Some(dir) => Self::with_data_dir(dir),
            None => Self::default(),
        };
        if let Some(dir) = get("VOLCANO_ATLAS_CONTENT_DIR") {
            cfg.content_dir = PathBuf::from(dir);
        }
        if let Some(path) = get("VOLCANO_ATLAS_GEO") {
            cfg.geo_path = PathBuf::from(path);
        }
        if let Some(url) = get("VOLCANO_ATLAS_BASE_URL") {
            cfg.site_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("VOLCANO_ATLAS_ALERTS_URL") {
            cfg.feeds.alerts_url = url;
        }
        if let Some(url) = get("VOLCANO_ATLAS_WEEKLY_URL") {
            cfg.feeds.weekly_url = url;
        }
        if let Some(secs) = get("VOLCANO_ATLAS_FEED_TIMEOUT").and_then(|s| s.trim().parse().ok()) {
            cfg.feeds.timeout_secs = secs;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_follow_site_layout() {
        let cfg = AtlasConfig::default();
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.content_dir, PathBuf::from("data").join("content"));
        assert_eq!(cfg.geo_path, PathBuf::from("volcanoes.json"));
        assert_eq!(cfg.stats_slug, "active-volcanoes");
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VOLCANO_ATLAS_DATA_DIR", "/srv/atlas"),
            ("VOLCANO_ATLAS_BASE_URL", "https://example.org/"),
            ("VOLCANO_ATLAS_FEED_TIMEOUT", "3"),
        ]
        .into_iter()
        .collect();
        let cfg = AtlasConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.content_dir, PathBuf::from("/srv/atlas/content"));
        assert_eq!(cfg.site_base_url, "https://example.org");
        assert_eq!(cfg.feeds.timeout_secs, 3);
        assert_eq!(cfg.feeds.alerts_url, DEFAULT_ALERTS_URL);
    }
}
