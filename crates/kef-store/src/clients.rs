//! Client roster store.

use std::path::{Path, PathBuf};

use chrono::Utc;
use kef_core::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::StoreError;
use crate::file::{read_json, write_json};

const FILE_NAME: &str = "clients.json";

/// Fields supplied when registering a client; id and timestamps are
/// store-assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub website_url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ClientStore {
    path: PathBuf,
}

impl ClientStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(FILE_NAME),
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or deserialization failure.
    pub async fn list(&self) -> Result<Vec<Client>, StoreError> {
        read_json(&self.path).await
    }

    /// Register a client and persist the full roster.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub async fn create(&self, new: NewClient) -> Result<Client, StoreError> {
        let mut clients = self.list().await?;
        let now = Utc::now();
        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            website_url: new.website_url,
            keywords: new.keywords,
            created_at: now,
            updated_at: now,
        };
        clients.push(client.clone());
        write_json(&self.path, &clients).await?;
        Ok(client)
    }

    /// Apply a partial update, bumping `updated_at`.
    ///
    /// An unknown id is a silent no-op and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub async fn update(&self, id: &str, patch: ClientPatch) -> Result<Option<Client>, StoreError> {
        let mut clients = self.list().await?;

        let Some(client) = clients.iter_mut().find(|client| client.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            client.name = name;
        }
        if let Some(website_url) = patch.website_url {
            client.website_url = website_url;
        }
        if let Some(keywords) = patch.keywords {
            client.keywords = keywords;
        }
        client.updated_at = Utc::now();
        let updated = client.clone();

        write_json(&self.path, &clients).await?;
        Ok(Some(updated))
    }

    /// Remove a client. An unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut clients = self.list().await?;
        clients.retain(|client| client.id != id);
        write_json(&self.path, &clients).await
    }
}
