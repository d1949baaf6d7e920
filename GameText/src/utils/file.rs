//! File loading helpers

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Read and deserialize a JSON document from disk
///
/// # Errors
/// Returns [`Error::FileRead`] if the file cannot be read, or
/// [`Error::JsonError`] if it does not match the expected shape.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(serde_json::from_str(&content)?)
}
