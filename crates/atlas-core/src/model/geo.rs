// crates/atlas-core/src/model/geo.rs
use super::volcano::Coordinates;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// One point of the bulk geographic dataset.
///
/// Plain owned fields only, so the whole index can be cached with bincode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    pub volcano_number: Option<u32>,
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
    pub volcano_type: Option<String>,
    /// Negative values are BCE years.
    pub last_eruption_year: Option<i32>,
    pub landform: Option<String>,
    pub geological_summary: Option<String>,
    pub tectonic_setting: Option<String>,
    pub geologic_epoch: Option<String>,
    pub evidence_category: Option<String>,
    pub rock_type: Option<String>,
}

impl GeoFeature {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn volcano_type(&self) -> &str {
        self.volcano_type.as_deref().unwrap_or("")
    }

    /// `None` when either coordinate is missing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Coarse activity label derived from the last eruption year.
    pub fn activity_status(&self) -> &'static str {
        match self.last_eruption_year {
            Some(year) if year > 1900 => "Recently Active",
            Some(_) => "Historical",
            None => "Unknown",
        }
    }

    /// Simplified view used by country listings.
    pub fn to_country_volcano(&self) -> CountryVolcano {
        CountryVolcano {
            name: self.name.clone(),
            lat: self.latitude,
            lon: self.longitude,
            elevation: self.elevation,
            volcano_type: self.volcano_type().to_string(),
            last_eruption: self.last_eruption_year,
        }
    }
}

impl NameMatch for GeoFeature {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Simplified geo record returned by country lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryVolcano {
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub elevation: Option<f64>,
    #[serde(rename = "type")]
    pub volcano_type: String,
    pub last_eruption: Option<i32>,
}

/// Same as [`CountryVolcano`] plus the country, for world maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoMarker {
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub country: String,
    pub elevation: Option<f64>,
    #[serde(rename = "type")]
    pub volcano_type: String,
    pub last_eruption: Option<i32>,
}
