// crates/atlas-core/src/search.rs

//! Site search over curated volcanoes, countries and special pages.
//!
//! Plain lowercase substring matching. Each category contributes at most
//! `limit` hits; the merged list is ordered exact title match first, then
//! title prefix match, otherwise source order.

use crate::content::ContentStore;
use crate::error::Result;
use crate::model::{CountryRecord, SpecialPageRecord, VolcanoRecord};
use crate::text::group_thousands;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_LIMIT: usize = 20;
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    #[default]
    All,
    Volcanoes,
    Countries,
    Pages,
}

impl SearchCategory {
    fn includes(self, other: SearchCategory) -> bool {
        self == SearchCategory::All || self == other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchCategory::All => "all",
            SearchCategory::Volcanoes => "volcanoes",
            SearchCategory::Countries => "countries",
            SearchCategory::Pages => "pages",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SearchCategory::All),
            "volcanoes" => Ok(SearchCategory::Volcanoes),
            "countries" => Ok(SearchCategory::Countries),
            "pages" => Ok(SearchCategory::Pages),
            other => Err(format!("unknown search category: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub limit: usize,
    pub category: SearchCategory,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            limit: DEFAULT_LIMIT,
            category: SearchCategory::All,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn category(mut self, category: SearchCategory) -> Self {
        self.category = category;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Volcano,
    Country,
    Special,
    Ranking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub kind: HitKind,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_eruption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volcano_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    /// Hits before the final `limit` truncation.
    pub total: usize,
    pub query: String,
    pub category: SearchCategory,
}

/// Runs `query` against the content store. Queries shorter than two
/// characters return an empty response without touching the store.
pub fn search(store: &ContentStore, query: &SearchQuery) -> Result<SearchResponse> {
    let q = query.q.trim().to_lowercase();
    let mut response = SearchResponse {
        results: Vec::new(),
        total: 0,
        query: q.clone(),
        category: query.category,
    };
    if q.chars().count() < MIN_QUERY_LEN {
        return Ok(response);
    }

    let mut hits = Vec::new();
    if query.category.includes(SearchCategory::Volcanoes) {
        hits.extend(
            store
                .get_all_volcanoes()?
                .iter()
                .filter(|v| volcano_matches(v, &q))
                .take(query.limit)
                .map(volcano_hit),
        );
    }
    if query.category.includes(SearchCategory::Countries) {
        hits.extend(
            store
                .get_all_countries()?
                .iter()
                .filter(|c| contains(&c.title, &q) || contains(&c.hero.subtitle, &q))
                .take(query.limit)
                .map(country_hit),
        );
    }
    if query.category.includes(SearchCategory::Pages) {
        hits.extend(
            store
                .get_all_special_pages()?
                .iter()
                .filter(|p| contains(&p.title, &q) || contains(&p.hero.subtitle, &q))
                .take(query.limit)
                .map(page_hit),
        );
    }

    hits.sort_by_key(|h| relevance(&h.title, &q));
    response.total = hits.len();
    hits.truncate(query.limit);
    response.results = hits;

    debug!(q = %q, category = %query.category, total = response.total, "search");
    Ok(response)
}

fn contains(field: &str, q: &str) -> bool {
    field.to_lowercase().contains(q)
}

fn relevance(title: &str, q: &str) -> u8 {
    let title = title.to_lowercase();
    if title == q {
        0
    } else if title.starts_with(q) {
        1
    } else {
        2
    }
}

fn volcano_matches(v: &VolcanoRecord, q: &str) -> bool {
    contains(v.name(), q)
        || contains(v.country(), q)
        || contains(v.volcano_type(), q)
        || contains(v.status(), q)
}

fn volcano_hit(v: &VolcanoRecord) -> SearchHit {
    let elevation = v
        .elevation_m()
        .map(|m| format!("{}m", group_thousands(m.round() as i64)))
        .unwrap_or_else(|| "Unknown".to_string());
    SearchHit {
        kind: HitKind::Volcano,
        title: v.name().to_string(),
        subtitle: format!("{} • {}", v.country(), v.volcano_type()),
        description: format!("{elevation} • {}", v.status()),
        url: v.path(),
        status: Some(v.status().to_string()),
        last_eruption: Some(v.last_eruption().to_string()),
        volcano_count: None,
    }
}

fn country_hit(c: &CountryRecord) -> SearchHit {
    let mut description = format!("{} volcanoes", c.hero.volcano_count);
    if let Some(active) = c.hero.active_count.filter(|&n| n > 0) {
        description.push_str(&format!(" • {active} active"));
    }
    SearchHit {
        kind: HitKind::Country,
        title: c.title.clone(),
        subtitle: c.hero.subtitle.clone(),
        description,
        url: c.path(),
        status: None,
        last_eruption: None,
        volcano_count: Some(c.hero.volcano_count),
    }
}

fn page_hit(p: &SpecialPageRecord) -> SearchHit {
    let (kind, description) = if p.is_ranking() {
        (HitKind::Ranking, "Ranking")
    } else {
        (HitKind::Special, "Special Page")
    };
    SearchHit {
        kind,
        title: p.title.clone(),
        subtitle: p.hero.subtitle.clone(),
        description: description.to_string(),
        url: p.path(),
        status: None,
        last_eruption: None,
        volcano_count: None,
    }
}
