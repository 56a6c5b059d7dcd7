// crates/atlas-core/src/model/special.rs
use super::volcano::Faq;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Special,
    Ranking,
}

impl PageType {
    /// File name prefix used in the content directory.
    pub fn file_prefix(self) -> &'static str {
        match self {
            PageType::Special => "special-",
            PageType::Ranking => "ranking-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecialHero {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<HeroStat>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedVolcano {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub last_eruption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoList {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub volcanoes: Vec<ListedVolcano>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedCountry {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub volcano_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
}

/// A ranked table; rows are positional and free-typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankedTable {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

/// A special or ranking page (`special-<slug>.json` / `ranking-<slug>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPageRecord {
    pub slug: String,
    pub page_type: PageType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,
    #[serde(default)]
    pub hero: SpecialHero,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_stats: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_stats: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volcano_list: Option<VolcanoList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<ListedCountry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranked_table: Option<RankedTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpecialPageRecord {
    pub fn is_ranking(&self) -> bool {
        self.page_type == PageType::Ranking
    }

    /// Site path of the page (`/<slug>`).
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_ranking_page() {
        let page: SpecialPageRecord = serde_json::from_value(json!({
            "slug": "active-volcanoes",
            "page_type": "ranking",
            "title": "Most Active Volcanoes",
            "hero": { "title": "Most Active", "subtitle": "By eruption count" },
            "ranked_table": {
                "title": "Top",
                "headers": ["Volcano", "Country"],
                "rows": [["Etna", "Italy", 1, 2, 3, 4, 212, 4]]
            }
        }))
        .unwrap();

        assert!(page.is_ranking());
        assert_eq!(page.path(), "/active-volcanoes");
        assert_eq!(page.ranked_table.unwrap().rows[0][6], json!(212));
    }

    #[test]
    fn rejects_unknown_page_type() {
        let res: Result<SpecialPageRecord, _> = serde_json::from_value(json!({
            "slug": "x",
            "page_type": "landing",
        }));
        assert!(res.is_err());
    }
}
