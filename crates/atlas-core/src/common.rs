// crates/atlas-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the geo dataset.
///
/// Returned by [`GeoIndex::stats`](crate::geo::GeoIndex::stats), these counts
/// reflect the materialized in-memory index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub volcanoes: usize,
    pub countries: usize,
    pub with_coordinates: usize,
    pub with_known_eruption: usize,
}
