//! Opportunity set store.
//!
//! Search runs replace the whole stored set; the only per-record mutation is
//! the monotonic `visited` flag.

use std::path::{Path, PathBuf};

use kef_core::Opportunity;

use crate::error::StoreError;
use crate::file::{read_json, write_json};

const FILE_NAME: &str = "opportunities.json";

#[derive(Debug, Clone)]
pub struct OpportunityStore {
    path: PathBuf,
}

impl OpportunityStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(FILE_NAME),
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or deserialization failure.
    pub async fn list(&self) -> Result<Vec<Opportunity>, StoreError> {
        read_json(&self.path).await
    }

    /// Replace the entire stored set with the latest search run's results.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub async fn replace_all(&self, opportunities: &[Opportunity]) -> Result<(), StoreError> {
        write_json(&self.path, &opportunities).await
    }

    /// Set `visited = true` on one record. An unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub async fn set_visited(&self, id: &str) -> Result<(), StoreError> {
        let mut opportunities = self.list().await?;
        let Some(opp) = opportunities.iter_mut().find(|opp| opp.id == id) else {
            return Ok(());
        };
        opp.visited = true;
        write_json(&self.path, &opportunities).await
    }
}
