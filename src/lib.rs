//! Workspace facade: re-exports `atlas-core` so the demos can
//! `use volcano_atlas::prelude::*`.

pub use atlas_core::*;

pub mod prelude {
    pub use atlas_core::{
        build_country_view, merge_country_markers, resolve_volcano_page, search, AtlasConfig,
        AtlasError, ContentStore, GeoIndex, NameMatch, Result, SearchCategory, SearchQuery,
        VolcanoPage,
    };
}
