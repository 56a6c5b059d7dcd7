// crates/atlas-core/src/sitemap.rs

//! `sitemap.xml` and `robots.txt` rendered from `volcanoatlas-sitemap.json`.

use crate::model::SitemapEntry;
use chrono::NaiveDate;
use std::fmt::Write;

const DEFAULT_CHANGEFREQ: &str = "monthly";
const DEFAULT_PRIORITY: &str = "0.5";

/// Renders a sitemaps.org `urlset`. Every entry gets the same `lastmod`;
/// entries without `changefreq`/`priority` get `monthly`/`0.5`.
pub fn render_sitemap_xml(entries: &[SitemapEntry], base_url: &str, lastmod: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = lastmod.format("%Y-%m-%d");

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        let changefreq = entry.changefreq.as_deref().unwrap_or(DEFAULT_CHANGEFREQ);
        let priority = entry
            .priority
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());

        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&format!("{base}{}", entry.url)),
            escape_xml(changefreq),
            escape_xml(&priority),
        );
    }
    xml.push_str("</urlset>");
    xml
}

/// Allow-all `robots.txt` pointing at the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "# https://www.robotstxt.org/robotstxt.html\nUser-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml",
        base_url.trim_end_matches('/')
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    #[test]
    fn renders_defaults_and_values() {
        let entries = vec![
            SitemapEntry {
                url: "/".into(),
                changefreq: Some("daily".into()),
                priority: Some(Priority::Number(1.0)),
            },
            SitemapEntry {
                url: "/volcano/etna?a=1&b=2".into(),
                changefreq: None,
                priority: Some(Priority::Text("0.8".into())),
            },
            SitemapEntry {
                url: "/countries".into(),
                changefreq: None,
                priority: None,
            },
        ];
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let xml = render_sitemap_xml(&entries, "https://example.org/", date);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(xml.contains("<loc>https://example.org/</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<loc>https://example.org/volcano/etna?a=1&amp;b=2</loc>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert_eq!(xml.matches("<lastmod>2024-05-01</lastmod>").count(), 3);
    }

    #[test]
    fn numeric_priority_is_not_rounded() {
        let entries = vec![
            SitemapEntry {
                url: "/volcano/etna".into(),
                changefreq: None,
                priority: Some(Priority::Number(0.85)),
            },
            SitemapEntry {
                url: "/volcano/fuji".into(),
                changefreq: None,
                priority: Some(Priority::Number(0.8)),
            },
        ];
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let xml = render_sitemap_xml(&entries, "https://example.org", date);
        assert!(xml.contains("<priority>0.85</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = robots_txt("https://example.org/");
        assert!(robots.contains("User-agent: *\nAllow: /"));
        assert!(robots.ends_with("Sitemap: https://example.org/sitemap.xml"));
    }
}
