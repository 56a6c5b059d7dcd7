// crates/atlas-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the atlas data layer.
///
/// Expected absences (a slug without a content file, a name missing from the
/// geo dataset) are not errors; lookups report them as `None`.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T, E = AtlasError> = std::result::Result<T, E>;

#[cfg(feature = "feeds")]
impl From<reqwest::Error> for AtlasError {
    fn from(e: reqwest::Error) -> Self {
        AtlasError::Http(e.to_string())
    }
}
