//! Per-request folder resolution with memoization.
//!
//! URL path segments name folders either by UUID or by one of the fixed
//! system-folder aliases ("root", "trash", "texture", ...). Resolution
//! results are cached for the lifetime of one request so that repeated
//! lookups while walking a subtree cost one store round-trip per
//! distinct folder. There is no cross-request caching.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, Folder};
use ais_store::InventoryStore;

/// Resolves folder tokens and IDs against the store, memoized per request.
pub struct FolderResolver {
    store: Arc<dyn InventoryStore>,
    owner: Uuid,
    cache: HashMap<Uuid, Folder>,
}

impl FolderResolver {
    pub fn new(store: Arc<dyn InventoryStore>, owner: Uuid) -> Self {
        Self {
            store,
            owner,
            cache: HashMap::new(),
        }
    }

    /// Resolve a path token: a system-folder alias or a raw UUID.
    ///
    /// Unknown aliases, malformed UUIDs, and missing folders all yield
    /// `NotFound` — the caller cannot distinguish them and should not.
    pub async fn resolve(&mut self, token: &str) -> AppResult<Folder> {
        let folder = if let Some(kind) = AssetType::from_alias(token) {
            self.store
                .folder_by_type(self.owner, kind)
                .await?
                .ok_or_else(|| AppError::not_found("Not Found"))?
        } else {
            let id = Uuid::parse_str(token).map_err(|_| AppError::not_found("Not Found"))?;
            self.store
                .folder(self.owner, id)
                .await?
                .ok_or_else(|| AppError::not_found("Not Found"))?
        };
        self.cache.insert(folder.id, folder.clone());
        Ok(folder)
    }

    /// Memoized point lookup by folder ID.
    pub async fn get(&mut self, id: Uuid) -> AppResult<Option<Folder>> {
        if let Some(folder) = self.cache.get(&id) {
            return Ok(Some(folder.clone()));
        }
        let folder = self.store.folder(self.owner, id).await?;
        if let Some(folder) = &folder {
            self.cache.insert(folder.id, folder.clone());
        }
        Ok(folder)
    }
}
