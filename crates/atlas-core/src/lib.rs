// crates/atlas-core/src/lib.rs

pub mod activity; // Live alert + weekly report feeds
pub mod alias;
pub mod common;
pub mod config;
pub mod content; // Curated JSON pages
pub mod error;
pub mod eruptions;
pub mod fallback; // Dynamic pages for volcanoes without curated content
pub mod geo; // Geo dataset queries
pub mod loader; // Geo dataset loading + binary cache
pub mod model;
pub mod resolver; // Curated <-> geo join
pub mod search;
pub mod sitemap;
pub mod text;
pub mod traits;
// Raw GeoJSON input, only used by the loader
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{AtlasError, Result};
// Export the Model Types
pub use model::{
    Coordinates, CountryRecord, CountryVolcano, GeoFeature, GeoMarker, MergedMarker, PageType,
    SpecialPageRecord, VolcanoRecord,
};

pub use crate::activity::{ActivityAggregator, FeedFetcher, RecentActivity};
#[cfg(feature = "feeds")]
pub use crate::activity::HttpFetcher;
pub use crate::common::DatasetStats;
pub use crate::config::{AtlasConfig, FeedConfig};
pub use crate::content::ContentStore;
pub use crate::eruptions::Eruption;
pub use crate::fallback::{resolve_volcano_page, DynamicVolcano, VolcanoPage};
pub use crate::geo::GeoIndex;
pub use crate::resolver::{build_country_view, merge_country_markers, CountryMerge, CountryView};
pub use crate::search::{search, SearchCategory, SearchQuery, SearchResponse};
// Export the matching trait (needed for `is_named` / `name_key` on records)
pub use crate::traits::NameMatch;
