//! atlas-cli
//! =========
//!
//! Command-line interface for the `atlas-core` VolcanoAtlas data layer.
//!
//! This crate primarily provides a binary (`volcano-atlas`). The library
//! target only carries this overview so that the docs render a page for it.
//!
//! Basic usage:
//!
//! ```text
//! volcano-atlas --help
//! volcano-atlas stats
//! volcano-atlas volcano mount-fuji
//! volcano-atlas country japan
//! volcano-atlas coords Kilauea Etna
//! volcano-atlas search etna --category volcanoes
//! volcano-atlas sitemap --out public
//! ```
//!
//! For programmatic access to the records and lookups, use [`atlas-core`]
//! directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
