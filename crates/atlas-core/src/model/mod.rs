// crates/atlas-core/src/model/mod.rs
pub mod convert;
pub mod country;
pub mod geo;
pub mod marker;
pub mod site;
pub mod special;
pub mod volcano;

pub use country::{CountryHero, CountryRecord, TableEntry, VolcanoTable, YearValue};
pub use geo::{CountryVolcano, GeoFeature, GeoMarker};
pub use marker::MergedMarker;
pub use site::{HomepageData, MapMarker, NavData, NavLink, Priority, SeoEntry, SitemapEntry};
pub use special::{PageType, RankedTable, SpecialHero, SpecialPageRecord};
pub use volcano::{Coordinates, Faq, RelatedVolcano, VolcanoHero, VolcanoRecord};

/// Suffix appended to the geo dataset file name for its binary cache.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "geo.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.geo.bin";
