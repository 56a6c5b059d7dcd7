// crates/atlas-core/src/loader/mod.rs

//! # Geo Dataset Loader
//!
//! Handles the Physical Layer (I/O, Decompression, binary cache) and
//! delegates to the raw JSON types plus [`crate::model::convert`].
//!
//! The dataset is static build-time data: [`GeoIndex::load`] parses it once
//! per process and keeps it forever. Picking up a changed `volcanoes.json`
//! requires a restart.

pub mod common_io;

use crate::config::AtlasConfig;
use crate::error::{AtlasError, Result};
use crate::geo::GeoIndex;
use crate::model::{convert, GeoFeature, CACHE_SUFFIX};
use crate::raw::GeoCollectionRaw;
use common_io::SourceStamp;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

// Single in-process cache so we only parse once per process.
static GEO_INDEX_CACHE: OnceCell<GeoIndex> = OnceCell::new();

impl GeoIndex {
    /// Process-wide index for `config.geo_path`.
    ///
    /// The first successful call wins; later calls return the same index
    /// regardless of the configuration passed. A failed load is not cached,
    /// so the next call retries.
    pub fn load(config: &AtlasConfig) -> Result<&'static GeoIndex> {
        GEO_INDEX_CACHE.get_or_try_init(|| Self::load_from_path(&config.geo_path))
    }

    /// **Smart Load:** uses the binary cache next to `path` when it was
    /// written for exactly this dataset file (same length and mtime),
    /// otherwise parses the JSON and refreshes the cache (best-effort).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);
        let stamp = SourceStamp::of(path);

        if let (Some(cache), Some(stamp)) = (cache_path.as_deref(), stamp) {
            match read_cache(cache) {
                Ok((cached, features)) if cached == stamp => {
                    debug!(cache = %cache.display(), "geo dataset loaded from cache");
                    return Ok(Self::from_features(features));
                }
                Ok(_) => debug!(cache = %cache.display(), "geo cache is stale"),
                Err(e) => debug!(cache = %cache.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        let index = Self::load_raw_json(path)?;

        if let (Some(cache), Some(stamp)) = (cache_path.as_deref(), stamp) {
            if let Err(e) = write_cache(cache, stamp, index.features()) {
                debug!(cache = %cache.display(), error = %e, "could not write geo cache");
            }
        }

        Ok(index)
    }

    /// Parses the source JSON (gzip when the path ends in `.gz`) without
    /// touching the binary cache.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let index = Self::from_reader(reader)
            .map_err(|e| AtlasError::InvalidData(format!("{}: {}", path.display(), e)))?;
        info!(
            path = %path.display(),
            features = index.len(),
            "geo dataset parsed"
        );
        Ok(index)
    }

    /// Parses a GeoJSON feature collection from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: GeoCollectionRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_features(convert::from_raw(raw)))
    }
}

// Cache layout: bincode of `(SourceStamp, Vec<GeoFeature>)`, gzip-wrapped
// under `compact`.
fn read_cache(path: &Path) -> Result<(SourceStamp, Vec<GeoFeature>)> {
    let reader = BufReader::new(File::open(path)?);

    #[cfg(feature = "compact")]
    let reader = flate2::read::GzDecoder::new(reader);

    Ok(bincode::deserialize_from(reader)?)
}

fn write_cache(path: &Path, stamp: SourceStamp, features: &[GeoFeature]) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    {
        let mut encoder = flate2::write::GzEncoder::new(writer, flate2::Compression::default());
        bincode::serialize_into(&mut encoder, &(stamp, features))?;
        encoder.finish()?.flush()?;
    }
    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        bincode::serialize_into(&mut writer, &(stamp, features))?;
        writer.flush()?;
    }
    Ok(())
}
