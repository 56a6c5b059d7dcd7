// crates/atlas-core/src/loader/common_io.rs
use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Opens the dataset, buffering it and, for `.gz` files, decompressing.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AtlasError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(AtlasError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `volcanoes.json` -> `volcanoes.json.<suffix>`
pub fn get_cache_path(json_path: &Path, suffix: &str) -> Option<PathBuf> {
    let filename = json_path.file_name()?.to_string_lossy();
    Some(json_path.with_file_name(format!("{filename}.{suffix}")))
}

/// Identity of a dataset file as recorded in its binary cache.
///
/// A cache is only reused when the stamp matches exactly, so a dataset
/// replaced by an older copy (`cp -p`, `rsync -t`, tar) is still reparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStamp {
    pub len: u64,
    pub modified_secs: u64,
    pub modified_nanos: u32,
}

impl SourceStamp {
    pub fn of(source: &Path) -> Option<Self> {
        let meta = fs::metadata(source).ok()?;
        let modified = meta.modified().ok()?.duration_since(UNIX_EPOCH).ok()?;
        Some(Self {
            len: meta.len(),
            modified_secs: modified.as_secs(),
            modified_nanos: modified.subsec_nanos(),
        })
    }
}
