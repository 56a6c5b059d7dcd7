//! Country marker merge without any files on disk.
//!
//! Curated records win on name collisions; geo-only volcanoes are appended
//! without a page, and only plottable markers reach the map.

use volcano_atlas::prelude::*;
use volcano_atlas::resolver::map_markers;
use volcano_atlas::{GeoFeature, VolcanoRecord};

fn geo(name: &str, lat: f64, lon: f64, year: Option<i32>) -> GeoFeature {
    GeoFeature {
        volcano_number: None,
        name: name.to_string(),
        country: "Japan".to_string(),
        region: None,
        subregion: None,
        latitude: Some(lat),
        longitude: Some(lon),
        elevation: Some(1500.0),
        volcano_type: Some("Stratovolcano".to_string()),
        last_eruption_year: year,
        landform: None,
        geological_summary: None,
        tectonic_setting: None,
        geologic_epoch: None,
        evidence_category: None,
        rock_type: None,
    }
}

fn main() -> Result<()> {
    let curated: Vec<VolcanoRecord> = vec![serde_json::from_value(serde_json::json!({
        "slug": "mount-fuji",
        "hero": {
            "name": "Fujisan",
            "country": "Japan",
            "type": "Stratovolcano",
            "status": "Active",
            "elevation_m": 3776,
            "last_eruption": "1707",
            "coordinates": { "lat": 35.3606, "lon": 138.7274 }
        }
    }))?];

    let features = vec![
        geo("Fujisan", 35.3606, 138.7274, Some(1707)),
        geo("Aso", 32.884, 131.104, Some(2021)),
        geo("Unmapped", 0.0, 0.0, None),
    ];

    let merge = merge_country_markers(&curated, &features);
    println!("Merged volcanoes: {}", merge.markers.len());
    for m in &merge.markers {
        let page = if m.has_page { "page" } else { "geo only" };
        println!("- {:<10} {:<16} {:<9} {}", m.name, m.status, page, m.href());
    }

    let plotted = map_markers(&merge.markers);
    println!("Plotted on map: {}", plotted.len());
    Ok(())
}
