//! Loading captured queries from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::query::CapturedQuery;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to read capture file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid capture file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON array of captured queries.
pub fn load(path: &Path) -> Result<Vec<CapturedQuery>, CaptureError> {
    let content = fs::read_to_string(path).map_err(|source| CaptureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let captured = parse(&content).map_err(|source| CaptureError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = captured.len(), "loaded capture file");
    Ok(captured)
}

/// Parse a JSON array of captured queries.
pub fn parse(content: &str) -> Result<Vec<CapturedQuery>, serde_json::Error> {
    serde_json::from_str(content)
}
