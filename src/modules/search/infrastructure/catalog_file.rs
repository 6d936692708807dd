use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::modules::search::domain::{CatalogItem, User};
use crate::shared::errors::{AppError, AppResult};

use super::{InMemoryCatalogRepository, InMemoryUserRepository};

/// On-disk catalog: entries plus the accounts allowed to search them
///
/// A bare JSON array of entries is accepted as a catalog without accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFormat {
    Full(CatalogSnapshot),
    ItemsOnly(Vec<CatalogItem>),
}

impl CatalogSnapshot {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let snapshot = match serde_json::from_str::<SnapshotFormat>(json)? {
            SnapshotFormat::Full(snapshot) => snapshot,
            SnapshotFormat::ItemsOnly(items) => CatalogSnapshot {
                items,
                users: Vec::new(),
            },
        };

        if let Some(item) = snapshot.items.iter().find(|item| item.name.trim().is_empty()) {
            return Err(AppError::InvalidInput(format!(
                "Catalog entry {} has an empty name",
                item.id
            )));
        }

        Ok(snapshot)
    }

    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigurationError(format!(
                "Cannot read catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let snapshot = Self::from_json_str(&json)?;
        info!(
            "Loaded catalog {} ({} entries, {} users)",
            path.display(),
            snapshot.items.len(),
            snapshot.users.len()
        );
        Ok(snapshot)
    }

    pub fn into_repositories(self) -> (InMemoryCatalogRepository, InMemoryUserRepository) {
        (
            InMemoryCatalogRepository::new(self.items),
            InMemoryUserRepository::new(self.users),
        )
    }
}
