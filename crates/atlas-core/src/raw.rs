// crates/atlas-core/src/raw.rs

//! Serde mirror of `volcanoes.json` exactly as published.
//!
//! The source is a GeoJSON `FeatureCollection` whose property names follow
//! the upstream catalogue (`Volcano_Name`, `Last_Eruption_Year`, ...). These
//! types are only used at load time; [`crate::model::convert`] turns them into
//! [`GeoFeature`](crate::model::GeoFeature).

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GeoCollectionRaw {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub features: Vec<GeoFeatureRaw>,
}

#[derive(Debug, Deserialize)]
pub struct GeoFeatureRaw {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Sometimes numeric, sometimes a string.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
    pub properties: GeoPropertiesRaw,
}

#[derive(Debug, Deserialize)]
pub struct GeometryRaw {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// GeoJSON order: `[lon, lat]`.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct GeoPropertiesRaw {
    #[serde(rename = "Volcano_Number", default)]
    pub volcano_number: Option<f64>,
    #[serde(rename = "Volcano_Name")]
    pub volcano_name: String,
    #[serde(rename = "Volcanic_Landform", default)]
    pub volcanic_landform: Option<String>,
    #[serde(rename = "Primary_Volcano_Type", default)]
    pub primary_volcano_type: Option<String>,
    #[serde(rename = "Last_Eruption_Year", default)]
    pub last_eruption_year: Option<f64>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Region", default)]
    pub region: Option<String>,
    #[serde(rename = "Subregion", default)]
    pub subregion: Option<String>,
    #[serde(rename = "Geological_Summary", default)]
    pub geological_summary: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<f64>,
    #[serde(rename = "Elevation", default)]
    pub elevation: Option<f64>,
    #[serde(rename = "Tectonic_Setting", default)]
    pub tectonic_setting: Option<String>,
    #[serde(rename = "Geologic_Epoch", default)]
    pub geologic_epoch: Option<String>,
    #[serde(rename = "Evidence_Category", default)]
    pub evidence_category: Option<String>,
    #[serde(rename = "Major_Rock_Type", default)]
    pub major_rock_type: Option<String>,
}
