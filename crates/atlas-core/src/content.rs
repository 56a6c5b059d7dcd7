// crates/atlas-core/src/content.rs

//! # Content Store
//!
//! Read-through access to the pre-built JSON content tree:
//!
//! ```text
//! data/
//!   volcanoatlas-nav.json
//!   volcanoatlas-homepage.json
//!   volcanoatlas-seo.json
//!   volcanoatlas-sitemap.json
//!   content/
//!     volcano-<slug>.json
//!     country-<slug>.json
//!     special-<slug>.json | ranking-<slug>.json
//! ```
//!
//! Nothing is cached: bulk calls re-scan the directory every time. Single
//! lookups treat a missing file as a normal outcome and swallow (but log)
//! unreadable or malformed files. Bulk calls and the site-wide files
//! propagate every failure.

use crate::config::{AtlasConfig, DEFAULT_STATS_SLUG};
use crate::error::{AtlasError, Result};
use crate::model::{
    CountryRecord, HomepageData, MapMarker, NavData, PageType, SeoEntry, SitemapEntry,
    SpecialPageRecord, VolcanoRecord,
};
use crate::text::group_thousands;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const VOLCANO_PREFIX: &str = "volcano-";
const COUNTRY_PREFIX: &str = "country-";
const JSON_SUFFIX: &str = ".json";

const NAV_FILE: &str = "volcanoatlas-nav.json";
const HOMEPAGE_FILE: &str = "volcanoatlas-homepage.json";
const SEO_FILE: &str = "volcanoatlas-seo.json";
const SITEMAP_FILE: &str = "volcanoatlas-sitemap.json";

#[derive(Debug, Clone)]
pub struct ContentStore {
    data_dir: PathBuf,
    content_dir: PathBuf,
    stats_slug: String,
}

impl ContentStore {
    pub fn new(data_dir: impl Into<PathBuf>, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            content_dir: content_dir.into(),
            stats_slug: DEFAULT_STATS_SLUG.to_string(),
        }
    }

    pub fn from_config(config: &AtlasConfig) -> Self {
        Self::new(&config.data_dir, &config.content_dir).with_stats_slug(&config.stats_slug)
    }

    /// Ranking page consulted for per-volcano eruption statistics.
    pub fn with_stats_slug(mut self, slug: impl Into<String>) -> Self {
        self.stats_slug = slug.into();
        self
    }

    pub fn stats_slug(&self) -> &str {
        &self.stats_slug
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    // -----------------------------------------------------------------------
    // VOLCANOES
    // -----------------------------------------------------------------------

    /// Curated page for `slug`, or `None` when no `volcano-<slug>.json` exists
    /// (or it cannot be parsed).
    pub fn get_volcano_by_slug(&self, slug: &str) -> Option<VolcanoRecord> {
        let path = self.content_path(VOLCANO_PREFIX, slug)?;
        read_optional(&path)
    }

    pub fn get_all_volcanoes(&self) -> Result<Vec<VolcanoRecord>> {
        self.load_all(VOLCANO_PREFIX)
    }

    /// Slugs of every curated volcano page, sorted.
    pub fn volcano_slugs(&self) -> Result<Vec<String>> {
        self.list_slugs(VOLCANO_PREFIX)
    }

    pub fn has_volcano_content(&self, slug: &str) -> bool {
        self.content_path(VOLCANO_PREFIX, slug)
            .is_some_and(|p| p.is_file())
    }

    /// Map markers for curated volcanoes that carry usable coordinates.
    pub fn get_map_markers(&self) -> Result<Vec<MapMarker>> {
        let markers = self
            .get_all_volcanoes()?
            .into_iter()
            .filter_map(|v| {
                let coords = v.coordinates().filter(|c| c.is_plottable())?;
                Some(MapMarker {
                    title: v.name().to_string(),
                    slug: v.path(),
                    lat: coords.lat,
                    lon: coords.lon,
                    volcano_type: v.volcano_type().to_string(),
                    elevation: v
                        .elevation_m()
                        .map(|m| format!("{} m", group_thousands(m.round() as i64)))
                        .unwrap_or_else(|| "Unknown".to_string()),
                    country: v.country().to_string(),
                    last_eruption: v.last_eruption().to_string(),
                    status: Some(v.status().to_string()).filter(|s| !s.is_empty()),
                })
            })
            .collect();
        Ok(markers)
    }

    // -----------------------------------------------------------------------
    // COUNTRIES
    // -----------------------------------------------------------------------

    pub fn get_country_by_slug(&self, slug: &str) -> Option<CountryRecord> {
        let path = self.content_path(COUNTRY_PREFIX, slug)?;
        read_optional(&path)
    }

    pub fn get_all_countries(&self) -> Result<Vec<CountryRecord>> {
        self.load_all(COUNTRY_PREFIX)
    }

    /// Volcano name -> slug for the rows of a country's volcano table whose
    /// slug points at an existing curated page. Any problem yields an empty
    /// map.
    pub fn get_country_volcanoes_with_pages(&self, country_slug: &str) -> HashMap<String, String> {
        let Some(country) = self.get_country_by_slug(country_slug) else {
            return HashMap::new();
        };
        country
            .table_entries()
            .into_iter()
            .filter_map(|e| {
                let slug = e.slug?;
                self.has_volcano_content(&slug).then_some((e.name, slug))
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // SPECIAL & RANKING PAGES
    // -----------------------------------------------------------------------

    /// Special page first, then ranking page; first existing file wins.
    pub fn get_special_page(&self, slug: &str) -> Option<SpecialPageRecord> {
        for kind in [PageType::Special, PageType::Ranking] {
            let Some(path) = self.content_path(kind.file_prefix(), slug) else {
                return None;
            };
            if path.is_file() {
                return read_optional(&path);
            }
        }
        debug!(slug, "no special or ranking page");
        None
    }

    /// Only `ranking-<slug>.json`, ignoring a special page of the same slug.
    pub fn get_ranking_page(&self, slug: &str) -> Option<SpecialPageRecord> {
        let path = self.content_path(PageType::Ranking.file_prefix(), slug)?;
        read_optional(&path)
    }

    /// Slugs of all special and ranking pages, sorted and de-duplicated.
    pub fn get_all_special_page_slugs(&self) -> Result<Vec<String>> {
        let mut slugs = self.list_slugs(PageType::Special.file_prefix())?;
        slugs.extend(self.list_slugs(PageType::Ranking.file_prefix())?);
        slugs.sort();
        slugs.dedup();
        Ok(slugs)
    }

    /// Every special/ranking page that resolves through
    /// [`get_special_page`](Self::get_special_page).
    pub fn get_all_special_pages(&self) -> Result<Vec<SpecialPageRecord>> {
        Ok(self
            .get_all_special_page_slugs()?
            .iter()
            .filter_map(|slug| self.get_special_page(slug))
            .collect())
    }

    // -----------------------------------------------------------------------
    // SITE FILES
    // -----------------------------------------------------------------------

    pub fn get_nav_data(&self) -> Result<NavData> {
        read_json(&self.data_dir.join(NAV_FILE))
    }

    pub fn get_homepage_data(&self) -> Result<HomepageData> {
        read_json(&self.data_dir.join(HOMEPAGE_FILE))
    }

    /// SEO entry whose `url` equals `url` exactly.
    pub fn get_seo_data(&self, url: &str) -> Result<Option<SeoEntry>> {
        let entries: Vec<SeoEntry> = read_json(&self.data_dir.join(SEO_FILE))?;
        Ok(entries.into_iter().find(|e| e.url == url))
    }

    pub fn get_sitemap_entries(&self) -> Result<Vec<SitemapEntry>> {
        read_json(&self.data_dir.join(SITEMAP_FILE))
    }

    // -----------------------------------------------------------------------
    // INTERNAL HELPERS
    // -----------------------------------------------------------------------

    /// `<content_dir>/<prefix><slug>.json`, or `None` for slugs that could
    /// escape the content directory.
    fn content_path(&self, prefix: &str, slug: &str) -> Option<PathBuf> {
        if !is_safe_slug(slug) {
            debug!(slug, "rejecting slug");
            return None;
        }
        Some(self.content_dir.join(format!("{prefix}{slug}{JSON_SUFFIX}")))
    }

    /// File names in the content directory starting with `prefix`, sorted.
    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.content_dir)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if name.starts_with(prefix) && name.ends_with(JSON_SUFFIX) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn list_slugs(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .list(prefix)?
            .into_iter()
            .filter_map(|name| {
                name.strip_prefix(prefix)
                    .and_then(|s| s.strip_suffix(JSON_SUFFIX))
                    .map(str::to_string)
            })
            .collect())
    }

    fn load_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>> {
        self.list(prefix)?
            .iter()
            .map(|name| read_json(&self.content_dir.join(name)))
            .collect()
    }
}

fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        AtlasError::NotFound(format!("Content file not found at {}: {}", path.display(), e))
    })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AtlasError::InvalidData(format!("{}: {}", path.display(), e)))
}

/// Existence is checked first so expected misses are not logged as errors.
fn read_optional<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.is_file() {
        debug!(path = %path.display(), "no content file");
        return None;
    }
    match read_json(path) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load content file");
            None
        }
    }
}
