//! YAML file helpers shared by the file-backed stores.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tokio::fs;

use crate::ports::StoreError;

/// Read and parse a YAML file. A missing file yields `T::default()`.
pub(crate) async fn read_or_default<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    if !fs::try_exists(path)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?
    {
        return Ok(T::default());
    }

    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    if yaml.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&yaml).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Serialize `value` and replace `path` with it.
///
/// Writes a sibling `.tmp` file first and renames it over the target, so a
/// reader never sees a half-written document.
pub(crate) async fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let yaml = serde_yaml::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
    }

    let tmp = path.with_extension("yaml.tmp");
    fs::write(&tmp, yaml)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    tracing::trace!(path = %path.display(), "yaml document written");
    Ok(())
}
