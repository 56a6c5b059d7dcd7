//! End-to-end flows over a small on-disk site: content tree, site files and
//! a geo dataset, all written to a temporary directory.

use atlas_core::sitemap::render_sitemap_xml;
use atlas_core::{
    build_country_view, resolve_volcano_page, search, AtlasConfig, ContentStore, GeoIndex,
    SearchCategory, SearchQuery, VolcanoPage, VolcanoRecord,
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Site {
    _dir: TempDir,
    store: ContentStore,
    geo: GeoIndex,
    config: AtlasConfig,
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn fuji_page() -> Value {
    json!({
        "slug": "mount-fuji",
        "volcano_id": 283030,
        "title": "Mount Fuji",
        "meta_title": "Mount Fuji Volcano | VolcanoAtlas",
        "hero": {
            "name": "Fujisan",
            "local_name": "富士山",
            "country": "Japan",
            "region": "Honshu",
            "type": "Stratovolcano",
            "elevation_m": 3776,
            "elevation_ft": 12388,
            "status": "Active",
            "last_eruption": "1707",
            "coordinates": { "lat": 35.3606, "lon": 138.7274 },
            "badge": "UNESCO"
        },
        "sections": { "overview": { "title": "Overview", "content": "Iconic cone." } },
        "faqs": [{ "question": "Is Fuji active?", "answer": "Yes." }],
        "editor_note": { "reviewed": true }
    })
}

fn site() -> Site {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    let content = data.join("content");
    fs::create_dir_all(&content).unwrap();

    write_json(&content.join("volcano-mount-fuji.json"), &fuji_page());
    write_json(
        &content.join("country-japan.json"),
        &json!({
            "slug": "japan",
            "title": "Volcanoes in Japan",
            "hero": { "subtitle": "Ring of Fire", "volcano_count": 111, "active_count": 47 },
            "volcano_table": {
                "columns": ["#", "Volcano", "Slug"],
                "rows": [[1, "Fujisan", "mount-fuji"], [2, "Aso", null]]
            }
        }),
    );
    write_json(
        &content.join("ranking-active-volcanoes.json"),
        &json!({
            "slug": "active-volcanoes",
            "page_type": "ranking",
            "title": "Most Active Volcanoes",
            "hero": { "subtitle": "By eruption count" },
            "ranked_table": {
                "title": "Most active",
                "headers": ["Volcano", "Country", "Type", "Elevation", "Region", "Last", "Eruptions", "Max VEI"],
                "rows": [["Aso", "Japan", "Caldera", "1592", "Kyushu", "2021", 167, 4]]
            }
        }),
    );
    write_json(
        &data.join("volcanoatlas-sitemap.json"),
        &json!([
            { "url": "/", "changefreq": "daily", "priority": "1.0" },
            { "url": "/volcano/mount-fuji", "priority": 0.8 },
            { "url": "/volcanoes-in-japan" }
        ]),
    );
    write_json(
        &data.join("volcanoatlas-seo.json"),
        &json!([{ "url": "/volcano/mount-fuji", "title": "Mount Fuji", "description": "Japan's highest peak" }]),
    );
    write_json(
        &data.join("volcanoatlas-nav.json"),
        &json!({ "featured_volcanoes": [{ "title": "Mount Fuji", "url": "/volcano/mount-fuji" }] }),
    );

    let geo_path = dir.path().join("volcanoes.json");
    let feature = |name: &str, lat: f64, lon: f64, year: Value| {
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [lon, lat] },
            "properties": {
                "Volcano_Name": name,
                "Country": "Japan",
                "Primary_Volcano_Type": "Stratovolcano",
                "Last_Eruption_Year": year,
                "Elevation": 1592,
                "Latitude": lat,
                "Longitude": lon
            }
        })
    };
    write_json(
        &geo_path,
        &json!({
            "type": "FeatureCollection",
            "features": [
                feature("Fujisan", 35.3606, 138.7274, json!(1707)),
                feature("Aso", 32.884, 131.104, json!(2021)),
                feature("Kikai", 0.0, 0.0, Value::Null)
            ]
        }),
    );

    let mut config = AtlasConfig::with_data_dir(&data);
    config.geo_path = geo_path;
    config.site_base_url = "https://example.org".into();

    let store = ContentStore::from_config(&config);
    let geo = GeoIndex::load_from_path(&config.geo_path).unwrap();
    Site {
        _dir: dir,
        store,
        geo,
        config,
    }
}

#[test]
fn curated_page_round_trips_without_loss() {
    let site = site();
    let record = site.store.get_volcano_by_slug("mount-fuji").unwrap();
    assert_eq!(record.slug, "mount-fuji");
    assert_eq!(serde_json::to_value(&record).unwrap(), fuji_page());

    // Writing the record back and reading it again changes nothing.
    let path = site.config.content_dir.join("volcano-mount-fuji.json");
    fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();
    let again: VolcanoRecord = site.store.get_volcano_by_slug("mount-fuji").unwrap();
    assert_eq!(again, record);
}

#[test]
fn every_listed_slug_resolves_to_its_own_page() {
    let site = site();
    for slug in site.store.volcano_slugs().unwrap() {
        let record = site.store.get_volcano_by_slug(&slug).unwrap();
        assert_eq!(record.slug, slug);
    }
}

#[test]
fn volcano_pages_fall_back_to_the_geo_dataset() {
    let site = site();
    assert!(matches!(
        resolve_volcano_page(&site.store, &site.geo, "mount-fuji"),
        VolcanoPage::Full(_)
    ));

    let VolcanoPage::Dynamic(aso) = resolve_volcano_page(&site.store, &site.geo, "aso") else {
        panic!("expected dynamic page for aso");
    };
    assert_eq!(aso.total_eruptions, Some(167));
    assert_eq!(aso.max_vei, Some(4));
    assert_eq!(aso.status, "Recently Active");
    assert_eq!(aso.eruptions[0].year, 2021);

    assert_eq!(
        resolve_volcano_page(&site.store, &site.geo, "fuji"),
        VolcanoPage::NotFound
    );
}

#[test]
fn country_view_merges_both_sources() {
    let site = site();
    let view = build_country_view(&site.store, &site.geo, "japan")
        .unwrap()
        .unwrap();
    assert_eq!(view.country_name, "Japan");

    let names: Vec<_> = view.volcanoes.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Fujisan", "Aso", "Kikai"]);
    assert!(view.volcanoes[0].has_page);
    assert!(!view.volcanoes[1].has_page);
    // Kikai has no usable coordinates: listed, not plotted.
    assert_eq!(view.map_markers.len(), 2);
    assert!(view.unmatched_curated.is_empty());

    assert!(build_country_view(&site.store, &site.geo, "atlantis")
        .unwrap()
        .is_none());

    let with_pages = site.store.get_country_volcanoes_with_pages("japan");
    assert_eq!(with_pages.len(), 1);
    assert_eq!(with_pages["Fujisan"], "mount-fuji");
}

#[test]
fn search_is_repeatable() {
    let site = site();
    let query = SearchQuery::new("Japan").category(SearchCategory::All);
    let first = search(&site.store, &query).unwrap();
    let second = search(&site.store, &query).unwrap();
    assert_eq!(first, second);
    // Fujisan (by country) and the Japan country page.
    assert_eq!(first.total, 2);
}

#[test]
fn site_files() {
    let site = site();
    let seo = site.store.get_seo_data("/volcano/mount-fuji").unwrap().unwrap();
    assert_eq!(seo.title, "Mount Fuji");
    assert!(site.store.get_seo_data("/nowhere").unwrap().is_none());
    assert_eq!(site.store.get_nav_data().unwrap().featured_volcanoes.len(), 1);
    assert!(site.store.get_homepage_data().is_err());

    let entries = site.store.get_sitemap_entries().unwrap();
    let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let xml = render_sitemap_xml(&entries, &site.config.site_base_url, date);
    assert!(xml.contains("<loc>https://example.org/volcano/mount-fuji</loc>"));
    assert!(xml.contains("<priority>0.8</priority>"));
    assert_eq!(xml.matches("<url>").count(), 3);
}

#[test]
fn coordinates_by_name_example() {
    let site = site();
    let coords = site.geo.coordinates_by_names(&["fujisan", "ASO", "Etna"]);
    assert_eq!(coords.len(), 2);
    assert!(coords.contains_key("Fujisan"));
    assert!(coords.contains_key("Aso"));
}
