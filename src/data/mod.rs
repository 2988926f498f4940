//! Resource repositories.
//!
//! The bot has no database; everything it needs at startup comes from JSON files
//! under the configured resources directory. Each repository knows where its file
//! lives and converts the raw JSON into a validated domain model.

pub mod reply;
pub mod substat;

#[cfg(test)]
mod test;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::resource::ResourceError;

/// Reads and deserializes one JSON resource file.
///
/// # Returns
/// - `Ok(T)` - File read and parsed
/// - `Err(ResourceError::Read)` - File missing or unreadable
/// - `Err(ResourceError::Parse)` - File content does not match `T`
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| ResourceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ResourceError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
