//! Shared JSON file read/write helpers.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use uuid::Uuid;

use crate::error::StoreError;

/// Read a JSON file, returning `T::default()` if it does not exist yet.
pub(crate) async fn read_json<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

/// Replace a JSON file's contents via a temp file and atomic rename.
///
/// The stores assume a single writer (one dashboard process), so the temp
/// name only needs to be unique per write, not contended.
pub(crate) async fn write_json<T>(path: &Path, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
{
    let bytes = serde_json::to_vec_pretty(value)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "store".to_string());
    let temp_path = path.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

    fs::write(&temp_path, &bytes).await?;
    match fs::rename(&temp_path, path).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&temp_path).await;
            Err(e.into())
        }
    }
}
