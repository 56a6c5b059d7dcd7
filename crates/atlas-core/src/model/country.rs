// crates/atlas-core/src/model/country.rs
use super::volcano::Faq;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Year fields are written either as numbers (`2021`) or text (`"1707 CE"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for YearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearValue::Number(y) => write!(f, "{y}"),
            YearValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallestVolcano {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEruption {
    pub year: YearValue,
    pub volcano: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryHero {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default)]
    pub volcano_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tallest: Option<TallestVolcano>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_recent_eruption: Option<RecentEruption>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The per-country volcano listing. Rows are positional:
/// `[rank, name, slug | null, ...display columns]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VolcanoTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One row of a [`VolcanoTable`], reduced to the join columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    pub rank: Option<Value>,
    pub name: String,
    pub slug: Option<String>,
}

impl VolcanoTable {
    /// Rows that carry a volcano name; rows without one are skipped.
    pub fn entries(&self) -> Vec<TableEntry> {
        self.rows
            .iter()
            .filter_map(|row| {
                let name = row.get(1)?.as_str()?.trim();
                if name.is_empty() {
                    return None;
                }
                let slug = row
                    .get(2)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                Some(TableEntry {
                    rank: row.first().cloned(),
                    name: name.to_string(),
                    slug,
                })
            })
            .collect()
    }
}

/// A curated country page (`country-<slug>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub slug: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_answer: Option<Value>,
    #[serde(default)]
    pub hero: CountryHero,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub sections: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volcano_table: Option<VolcanoTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const TITLE_PREFIX: &str = "Volcanoes in ";

impl CountryRecord {
    /// Country name as used by the datasets: the page title without its
    /// `"Volcanoes in "` prefix.
    pub fn country_name(&self) -> &str {
        self.title
            .strip_prefix(TITLE_PREFIX)
            .unwrap_or(&self.title)
            .trim()
    }

    /// Site path of the page (`/volcanoes-in-<slug>`).
    pub fn path(&self) -> String {
        format!("/volcanoes-in-{}", self.slug)
    }

    pub fn table_entries(&self) -> Vec<TableEntry> {
        self.volcano_table
            .as_ref()
            .map(VolcanoTable::entries)
            .unwrap_or_default()
    }
}
