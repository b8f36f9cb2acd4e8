//! Login session store: the serialized user record of whoever is signed in.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kef_core::User;
use tokio::fs;

use crate::error::StoreError;
use crate::file::write_json;

const FILE_NAME: &str = "session.json";

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(FILE_NAME),
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or deserialization failure.
    pub async fn load(&self) -> Result<Option<User>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub async fn save(&self, user: &User) -> Result<(), StoreError> {
        write_json(&self.path, user).await
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O failure other than the file already
    /// being gone.
    pub async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
