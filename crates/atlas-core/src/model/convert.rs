// crates/atlas-core/src/model/convert.rs
use super::geo::GeoFeature;
use crate::raw::{GeoCollectionRaw, GeoFeatureRaw};

/// **Standard Converter:** Raw -> owned features.
///
/// Property coordinates win; the GeoJSON geometry (`[lon, lat]`) fills in
/// when the properties lack them. Features with a blank name are dropped.
pub fn from_raw(raw: GeoCollectionRaw) -> Vec<GeoFeature> {
    raw.features.into_iter().filter_map(feature_from_raw).collect()
}

fn feature_from_raw(f: GeoFeatureRaw) -> Option<GeoFeature> {
    let p = f.properties;
    let name = p.volcano_name.trim().to_string();
    if name.is_empty() {
        return None;
    }

    let (geo_lon, geo_lat) = match f.geometry.as_ref().map(|g| g.coordinates.as_slice()) {
        Some([lon, lat, ..]) => (Some(*lon), Some(*lat)),
        _ => (None, None),
    };

    Some(GeoFeature {
        volcano_number: p
            .volcano_number
            .filter(|n| *n >= 0.0)
            .map(|n| n as u32),
        name,
        country: p.country.map(|c| c.trim().to_string()).unwrap_or_default(),
        region: non_empty(p.region),
        subregion: non_empty(p.subregion),
        latitude: p.latitude.or(geo_lat),
        longitude: p.longitude.or(geo_lon),
        elevation: p.elevation,
        volcano_type: non_empty(p.primary_volcano_type),
        last_eruption_year: p.last_eruption_year.map(|y| y.round() as i32),
        landform: non_empty(p.volcanic_landform),
        geological_summary: non_empty(p.geological_summary),
        tectonic_setting: non_empty(p.tectonic_setting),
        geologic_epoch: non_empty(p.geologic_epoch),
        evidence_category: non_empty(p.evidence_category),
        rock_type: non_empty(p.major_rock_type),
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_and_falls_back_to_geometry() {
        let raw: GeoCollectionRaw = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": 332010,
                    "geometry": { "type": "Point", "coordinates": [-155.287, 19.421] },
                    "properties": {
                        "Volcano_Number": 332010,
                        "Volcano_Name": "Kilauea",
                        "Country": "United States",
                        "Primary_Volcano_Type": "Shield",
                        "Last_Eruption_Year": 2024,
                        "Elevation": 1222
                    }
                },
                {
                    "type": "Feature",
                    "id": "blank",
                    "properties": { "Volcano_Name": "   " }
                }
            ]
        }))
        .unwrap();

        let features = from_raw(raw);
        assert_eq!(features.len(), 1);
        let k = &features[0];
        assert_eq!(k.volcano_number, Some(332010));
        assert_eq!(k.latitude, Some(19.421));
        assert_eq!(k.longitude, Some(-155.287));
        assert_eq!(k.last_eruption_year, Some(2024));
        assert_eq!(k.region, None);
    }
}
