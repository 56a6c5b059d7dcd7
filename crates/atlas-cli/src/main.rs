//! volcano-atlas: command-line interface for atlas-core
//!
//! Inspects the pre-built content tree and the geo dataset the way the site
//! resolves them: curated pages first, dynamic fallbacks from the dataset,
//! merged country views, search, and the generated sitemap.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ volcano-atlas stats
//!
//! - Resolve a volcano page (curated or dynamic)
//!   $ volcano-atlas volcano mount-fuji
//!   $ volcano-atlas volcano akan
//!
//! - Country page with curated and geo-only volcanoes merged
//!   $ volcano-atlas country japan
//!
//! - Coordinates by name (case-insensitive)
//!   $ volcano-atlas coords Kilauea Etna
//!
//! - Search
//!   $ volcano-atlas search helens --limit 5 --category volcanoes
//!
//! - Live activity feeds
//!   $ volcano-atlas activity
//!
//! - Sitemap + robots.txt
//!   $ volcano-atlas sitemap --out public
//!
//! Data source
//! -----------
//!
//! Paths default to `data/` and `volcanoes.json` in the working directory,
//! can be set through `VOLCANO_ATLAS_*` environment variables, and are
//! overridden by `--data-dir`, `--geo` and `--base-url`. The geo dataset is
//! cached in binary form next to the JSON file for fast subsequent runs.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use atlas_core::sitemap::{render_sitemap_xml, robots_txt};
use atlas_core::{
    build_country_view, resolve_volcano_page, search, AtlasConfig, ContentStore, GeoIndex,
    SearchQuery, VolcanoPage,
};
use clap::Parser;
use serde::Serialize;
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let mut config = AtlasConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.content_dir = dir.join("content");
        config.data_dir = dir;
    }
    if let Some(geo) = args.geo {
        config.geo_path = geo;
    }
    if let Some(url) = args.base_url {
        config.site_base_url = url.trim_end_matches('/').to_string();
    }
    tracing::debug!(?config, "configuration");

    let store = ContentStore::from_config(&config);
    let load_geo = || {
        GeoIndex::load(&config)
            .with_context(|| format!("loading geo dataset {}", config.geo_path.display()))
    };

    match args.command {
        Commands::Stats => {
            let volcanoes = store.volcano_slugs()?;
            let countries = store.get_all_countries()?;
            let pages = store.get_all_special_page_slugs()?;
            let geo = load_geo()?.stats();
            println!("Content:");
            println!("  Volcano pages: {}", volcanoes.len());
            println!("  Country pages: {}", countries.len());
            println!("  Special/ranking pages: {}", pages.len());
            println!("Geo dataset:");
            println!("  Volcanoes: {}", geo.volcanoes);
            println!("  Countries: {}", geo.countries);
            println!("  With coordinates: {}", geo.with_coordinates);
            println!("  With known eruption: {}", geo.with_known_eruption);
        }

        Commands::Volcano { slug } => match resolve_volcano_page(&store, load_geo()?, &slug) {
            VolcanoPage::Full(record) => print_json(&record)?,
            VolcanoPage::Dynamic(page) => print_json(&page)?,
            VolcanoPage::NotFound => eprintln!("No volcano found for: {slug}"),
        },

        Commands::Country { slug } => match build_country_view(&store, load_geo()?, &slug)? {
            Some(view) => {
                if !view.unmatched_curated.is_empty() {
                    eprintln!(
                        "Curated volcanoes without a geo match: {}",
                        view.unmatched_curated.join(", ")
                    );
                }
                print_json(&view)?;
            }
            None => eprintln!("Country {slug} not found"),
        },

        Commands::Special { slug } => match store.get_special_page(&slug) {
            Some(page) => print_json(&page)?,
            None => eprintln!("No special or ranking page for: {slug}"),
        },

        Commands::Coords { names } => {
            let coords = load_geo()?.coordinates_by_names(&names);
            if coords.is_empty() {
                println!("No volcanoes found matching: {}", names.join(", "));
            } else {
                let mut found: Vec<_> = coords.into_iter().collect();
                found.sort_by(|a, b| a.0.cmp(&b.0));
                for (name, c) in found {
                    println!("{name}: {:.4}, {:.4}", c.lat, c.lon);
                }
            }
        }

        Commands::Search { q, limit, category } => {
            let query = SearchQuery::new(q).limit(limit).category(category);
            print_json(&search(&store, &query)?)?;
        }

        Commands::Activity => activity(&config)?,

        Commands::Sitemap { out } => {
            let entries = store.get_sitemap_entries()?;
            let today = chrono::Utc::now().date_naive();
            fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
            fs::write(
                out.join("sitemap.xml"),
                render_sitemap_xml(&entries, &config.site_base_url, today),
            )?;
            let robots = out.join("robots.txt");
            if robots.exists() {
                println!("Keeping existing {}", robots.display());
            } else {
                fs::write(&robots, robots_txt(&config.site_base_url))?;
            }
            println!("Sitemap generated: {} URLs -> {}", entries.len(), out.display());
        }
    }

    Ok(())
}

#[cfg(feature = "feeds")]
fn activity(config: &AtlasConfig) -> anyhow::Result<()> {
    let aggregator = atlas_core::ActivityAggregator::from_config(&config.feeds)?;
    print_json(&aggregator.get_all_recent_activity())
}

#[cfg(not(feature = "feeds"))]
fn activity(_config: &AtlasConfig) -> anyhow::Result<()> {
    anyhow::bail!("this build has no HTTP support; rebuild with the `feeds` feature")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
