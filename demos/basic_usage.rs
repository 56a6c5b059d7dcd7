//! Basic usage example for volcano-atlas
//!
//! This example demonstrates how to:
//! - Point the data layer at a content tree and a geo dataset
//! - Resolve volcano pages (curated, dynamic, not found)
//! - Look up coordinates by name
//! - Search the curated content
//!
//! Run from the site root (where `data/` and `volcanoes.json` live), or set
//! `VOLCANO_ATLAS_DATA_DIR` / `VOLCANO_ATLAS_GEO`.

use volcano_atlas::prelude::*;

fn main() -> Result<()> {
    println!("=== VolcanoAtlas Basic Usage Example ===\n");

    let config = AtlasConfig::from_env();
    let store = ContentStore::from_config(&config);

    println!("Loading geo dataset from {} ...", config.geo_path.display());
    let geo = GeoIndex::load(&config)?;
    let stats = geo.stats();
    println!(
        "✓ {} volcanoes in {} countries\n",
        stats.volcanoes, stats.countries
    );

    // Example 1: Curated pages
    println!("--- Example 1: Curated volcano pages ---");
    let slugs = store.volcano_slugs()?;
    println!("Curated pages: {}", slugs.len());
    for slug in slugs.iter().take(5) {
        if let Some(v) = store.get_volcano_by_slug(slug) {
            println!("- {} ({}) -> {}", v.name(), v.country(), v.path());
        }
    }
    println!();

    // Example 2: Page resolution with fallback
    println!("--- Example 2: Resolve pages ---");
    for slug in ["mount-fuji", "akan", "not-a-volcano"] {
        match resolve_volcano_page(&store, geo, slug) {
            VolcanoPage::Full(v) => println!("{slug}: curated page for {}", v.name()),
            VolcanoPage::Dynamic(d) => println!(
                "{slug}: dynamic page for {} ({} timeline entries)",
                d.name,
                d.eruptions.len()
            ),
            VolcanoPage::NotFound => println!("{slug}: 404"),
        }
    }
    println!();

    // Example 3: Coordinates by name
    println!("--- Example 3: Coordinates ---");
    for (name, c) in geo.coordinates_by_names(&["Kilauea", "Etna", "Atlantis"]) {
        println!("{name}: {:.3}, {:.3}", c.lat, c.lon);
    }
    println!();

    // Example 4: Search
    println!("--- Example 4: Search ---");
    let resp = search(&store, &SearchQuery::new("strato").limit(5))?;
    println!("{} hits for {:?} (showing {})", resp.total, resp.query, resp.results.len());
    for hit in resp.results {
        println!("- {} -> {}", hit.title, hit.url);
    }

    Ok(())
}
