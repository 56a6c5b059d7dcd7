// crates/atlas-core/src/activity.rs

//! # External Activity Aggregator
//!
//! Combines two third-party feeds into one "recent activity" view:
//!
//! - a JSON list of US volcanoes at elevated alert levels,
//! - an RSS feed of global weekly activity reports.
//!
//! Both feeds are fetched concurrently. A failing feed degrades to an empty
//! list (and a log line); [`ActivityAggregator::get_all_recent_activity`]
//! never fails. There is no retry and no caching.

use crate::config::FeedConfig;
use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::thread;
use tracing::{debug, info, warn};

// ----------------------------------------------------------------------------
// FEED RECORDS
// ----------------------------------------------------------------------------

/// One entry of the elevated-volcanoes alert feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevatedVolcano {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub volcano_name: String,
    /// `RED | ORANGE | YELLOW | GREEN`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub color_code: String,
    /// `WARNING | WATCH | ADVISORY | NORMAL`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alert_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub obs_fullname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sent_utc: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notice_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnum: Option<Value>,
}

impl ElevatedVolcano {
    pub fn alert_description(&self) -> &'static str {
        alert_level_description(&self.alert_level, &self.color_code)
    }
}

/// One `<item>` of the weekly report feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub title: String,
    pub volcano_name: String,
    pub country: String,
    /// Plain text; markup removed and whitespace collapsed.
    pub description: String,
    pub date_range: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub us_volcanoes: Vec<ElevatedVolcano>,
    pub global_reports: Vec<WeeklyReport>,
    /// RFC 3339 timestamp of the aggregation.
    pub last_updated: String,
}

// ----------------------------------------------------------------------------
// ALERT LEVELS
// ----------------------------------------------------------------------------

/// Ground-based alert level, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Normal,
    Advisory,
    Watch,
    Warning,
}

impl AlertLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Some(AlertLevel::Normal),
            "ADVISORY" => Some(AlertLevel::Advisory),
            "WATCH" => Some(AlertLevel::Watch),
            "WARNING" => Some(AlertLevel::Warning),
            _ => None,
        }
    }
}

/// Aviation color code, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorCode {
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorCode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GREEN" => Some(ColorCode::Green),
            "YELLOW" => Some(ColorCode::Yellow),
            "ORANGE" => Some(ColorCode::Orange),
            "RED" => Some(ColorCode::Red),
            _ => None,
        }
    }
}

/// Human-readable meaning of an alert; the more severe of the two signals
/// wins. Unknown values read as normal activity.
pub fn alert_level_description(alert_level: &str, color_code: &str) -> &'static str {
    let level = AlertLevel::parse(alert_level);
    let color = ColorCode::parse(color_code);
    if color == Some(ColorCode::Red) || level == Some(AlertLevel::Warning) {
        "Hazardous eruption imminent, underway, or suspected"
    } else if color == Some(ColorCode::Orange) || level == Some(AlertLevel::Watch) {
        "Heightened unrest with increased potential of eruption"
    } else if color == Some(ColorCode::Yellow) || level == Some(AlertLevel::Advisory) {
        "Elevated unrest above known background level"
    } else {
        "Normal activity or dormant state"
    }
}

// ----------------------------------------------------------------------------
// PARSERS
// ----------------------------------------------------------------------------

/// Parses the alert feed body. A JSON `null` means no elevated volcanoes.
///
/// Entries are converted one by one: `null` fields read as empty and an
/// entry that still does not fit is skipped, keeping the rest of the feed.
pub fn parse_elevated_volcanoes(body: &str) -> Result<Vec<ElevatedVolcano>> {
    let parsed: Option<Vec<Value>> = serde_json::from_str(body)?;
    let volcanoes = parsed
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(volcano) => Some(volcano),
            Err(e) => {
                debug!(error = %e, "skipping elevated volcano entry");
                None
            }
        })
        .collect();
    Ok(volcanoes)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<title>(.+?)</title>").expect("title regex"));

static TITLE_PARTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?) \((.+?)\) - Report for (.+?) - ").expect("title parts regex")
});
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<description>\s*(.*?)\s*</description>").expect("description regex")
});
static CDATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("cdata regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag regex"));
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("space regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<link>(.+?)</link>").expect("link regex"));
static POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<georss:point>(.+?) (.+?)</georss:point>").expect("georss regex")
});
static PUB_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<pubDate>(.+?)</pubDate>").expect("pubDate regex"));

fn capture<'a>(re: &Regex, haystack: &'a str) -> &'a str {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Extracts the reports from the weekly RSS document.
///
/// This is string extraction per `<item>`, not an XML parser. Items without
/// a recognizable volcano name or without a description are skipped.
pub fn parse_weekly_reports(xml: &str) -> Vec<WeeklyReport> {
    let mut reports = Vec::new();
    for item in xml.split("<item>").skip(1) {
        match parse_item(item) {
            Some(report) => reports.push(report),
            None => debug!("skipping weekly report item"),
        }
    }
    reports
}

fn parse_item(item: &str) -> Option<WeeklyReport> {
    let title = capture(&TITLE_RE, item);
    let parts = TITLE_PARTS_RE.captures(title)?;
    let volcano_name = parts.get(1)?.as_str().to_string();
    let country = parts.get(2).map_or("", |m| m.as_str()).to_string();
    let date_range = parts.get(3).map_or("", |m| m.as_str()).to_string();

    let description = clean_description(capture(&DESCRIPTION_RE, item));
    if volcano_name.is_empty() || description.is_empty() {
        return None;
    }

    let (lat, lon) = match POINT_RE.captures(item) {
        Some(c) => (
            c.get(1).and_then(|m| m.as_str().trim().parse().ok()),
            c.get(2).and_then(|m| m.as_str().trim().parse().ok()),
        ),
        None => (None, None),
    };

    Some(WeeklyReport {
        title: title.to_string(),
        volcano_name,
        country,
        description,
        date_range,
        link: capture(&LINK_RE, item).to_string(),
        lat,
        lon,
        pub_date: capture(&PUB_DATE_RE, item).to_string(),
    })
}

fn clean_description(raw: &str) -> String {
    let text = CDATA_RE.replace_all(raw, "$1");
    let text = text.replace("&lt;", "<").replace("&gt;", ">");
    let text = TAG_RE.replace_all(&text, "");
    let text = text.replace("&amp;", "&");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

// ----------------------------------------------------------------------------
// FETCHING
// ----------------------------------------------------------------------------

/// Source of feed bodies. Shared between the two fetch threads.
pub trait FeedFetcher: Sync {
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher; non-2xx responses are errors.
#[cfg(feature = "feeds")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "feeds")]
impl HttpFetcher {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "feeds")]
impl FeedFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}

pub struct ActivityAggregator<F> {
    fetcher: F,
    alerts_url: String,
    weekly_url: String,
}

#[cfg(feature = "feeds")]
impl ActivityAggregator<HttpFetcher> {
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?, config))
    }
}

impl<F: FeedFetcher> ActivityAggregator<F> {
    pub fn new(fetcher: F, config: &FeedConfig) -> Self {
        Self {
            fetcher,
            alerts_url: config.alerts_url.clone(),
            weekly_url: config.weekly_url.clone(),
        }
    }

    /// Elevated US volcanoes; empty on any failure.
    pub fn get_elevated_volcanoes(&self) -> Vec<ElevatedVolcano> {
        match self
            .fetcher
            .fetch_text(&self.alerts_url)
            .and_then(|body| parse_elevated_volcanoes(&body))
        {
            Ok(list) => list,
            Err(e) => {
                warn!(url = %self.alerts_url, error = %e, "alert feed unavailable");
                Vec::new()
            }
        }
    }

    /// Weekly reports; empty on any failure.
    pub fn get_weekly_reports(&self) -> Vec<WeeklyReport> {
        match self.fetcher.fetch_text(&self.weekly_url) {
            Ok(body) => parse_weekly_reports(&body),
            Err(e) => {
                warn!(url = %self.weekly_url, error = %e, "weekly report feed unavailable");
                Vec::new()
            }
        }
    }

    /// Both feeds, fetched in parallel.
    pub fn get_all_recent_activity(&self) -> RecentActivity {
        let (us_volcanoes, global_reports) = thread::scope(|s| {
            let alerts = s.spawn(|| self.get_elevated_volcanoes());
            let weekly = self.get_weekly_reports();
            let alerts = alerts.join().unwrap_or_else(|_| {
                warn!("alert feed worker panicked");
                Vec::new()
            });
            (alerts, weekly)
        });

        info!(
            us = us_volcanoes.len(),
            global = global_reports.len(),
            "recent activity aggregated"
        );

        RecentActivity {
            us_volcanoes,
            global_reports,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtlasError;
    use std::collections::HashMap;

    const WEEKLY: &str = r#"<?xml version="1.0"?>
<rss><channel><title>Weekly Volcanic Activity</title>
<item>
  <title>Etna (Italy) - Report for 5 June-11 June 2024 - New Activity/Unrest</title>
  <link>https://volcano.si.edu/showreport.cfm?wvar=GVP.WVAR20240605-211060</link>
  <description><![CDATA[<p>INGV reported   continuing
  &lt;b&gt;Strombolian&lt;/b&gt; activity.</p>]]></description>
  <pubDate>Wed, 12 Jun 2024 00:00:00 EST</pubDate>
  <georss:point>37.748 14.999</georss:point>
</item>
<item>
  <title>Not a report title</title>
  <description>Something</description>
</item>
<item>
  <title>Sakurajima (Japan) - Report for 5 June-11 June 2024 - Continuing Activity</title>
  <description>   </description>
</item>
</channel></rss>"#;

    struct StubFetcher(HashMap<&'static str, &'static str>);

    impl FeedFetcher for StubFetcher {
        fn fetch_text(&self, url: &str) -> Result<String> {
            self.0
                .get(url)
                .map(|s| s.to_string())
                .ok_or_else(|| AtlasError::Http(format!("unreachable: {url}")))
        }
    }

    fn config() -> FeedConfig {
        FeedConfig {
            alerts_url: "alerts".into(),
            weekly_url: "weekly".into(),
            ..FeedConfig::default()
        }
    }

    #[test]
    fn weekly_items_are_extracted_and_cleaned() {
        let reports = parse_weekly_reports(WEEKLY);
        assert_eq!(reports.len(), 1);
        let etna = &reports[0];
        assert_eq!(etna.volcano_name, "Etna");
        assert_eq!(etna.country, "Italy");
        assert_eq!(etna.date_range, "5 June-11 June 2024");
        assert_eq!(etna.description, "INGV reported continuing Strombolian activity.");
        assert_eq!(etna.lat, Some(37.748));
        assert_eq!(etna.lon, Some(14.999));
        assert_eq!(etna.pub_date, "Wed, 12 Jun 2024 00:00:00 EST");
        assert!(etna.link.contains("showreport.cfm"));
    }

    #[test]
    fn null_alert_feed_is_empty() {
        assert!(parse_elevated_volcanoes("null").unwrap().is_empty());
        assert!(parse_elevated_volcanoes("{").is_err());

        let list = parse_elevated_volcanoes(
            r#"[{"volcano_name":"Kilauea","color_code":"ORANGE","alert_level":"WATCH","vnum":"332010"}]"#,
        )
        .unwrap();
        assert_eq!(list[0].volcano_name, "Kilauea");
        assert_eq!(
            list[0].alert_description(),
            "Heightened unrest with increased potential of eruption"
        );
    }

    #[test]
    fn one_bad_alert_does_not_drop_the_feed() {
        let body = r#"[
            {"volcano_name":"Kilauea","color_code":"ORANGE","alert_level":"WATCH","notice_url":null},
            42,
            {"volcano_name":"Great Sitkin","color_code":"YELLOW","alert_level":"ADVISORY",
             "obs_fullname":"Alaska Volcano Observatory","sent_utc":"2024-06-11 20:10:00"}
        ]"#;
        let list = parse_elevated_volcanoes(body).unwrap();
        let names: Vec<_> = list.iter().map(|v| v.volcano_name.as_str()).collect();
        assert_eq!(names, vec!["Kilauea", "Great Sitkin"]);
        assert_eq!(list[0].notice_url, "");
        assert_eq!(list[1].obs_fullname, "Alaska Volcano Observatory");
    }

    #[test]
    fn alert_descriptions() {
        assert_eq!(
            alert_level_description("NORMAL", "RED"),
            "Hazardous eruption imminent, underway, or suspected"
        );
        assert_eq!(
            alert_level_description("advisory", "GREEN"),
            "Elevated unrest above known background level"
        );
        assert_eq!(alert_level_description("", ""), "Normal activity or dormant state");
        assert!(AlertLevel::Warning > AlertLevel::Watch);
        assert!(ColorCode::parse("purple").is_none());
    }

    #[test]
    fn unreachable_feeds_degrade_to_empty() {
        let agg = ActivityAggregator::new(StubFetcher(HashMap::new()), &config());
        let activity = agg.get_all_recent_activity();
        assert!(activity.us_volcanoes.is_empty());
        assert!(activity.global_reports.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&activity.last_updated).is_ok());

        let json = serde_json::to_value(&activity).unwrap();
        assert!(json.get("usVolcanoes").is_some());
        assert!(json.get("globalReports").is_some());
        assert!(json.get("lastUpdated").is_some());
    }

    #[test]
    fn one_failing_feed_keeps_the_other() {
        let feeds = HashMap::from([("weekly", WEEKLY)]);
        let agg = ActivityAggregator::new(StubFetcher(feeds), &config());
        let activity = agg.get_all_recent_activity();
        assert!(activity.us_volcanoes.is_empty());
        assert_eq!(activity.global_reports.len(), 1);
    }
}
