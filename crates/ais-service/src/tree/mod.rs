//! The tree mutation and traversal engine.
//!
//! Every operation takes a [`RequestContext`] and produces the response
//! wire value; HTTP status selection stays in the API layer. Tree walks
//! are iterative over explicit work queues, and every mutating operation
//! holds the advisory lock of the folder(s) it touches.

mod copy;
mod create;
mod delete;
mod links;
mod moves;
mod read;
mod update;

use std::sync::Arc;

use ais_core::AppResult;
use ais_entity::Folder;
use ais_store::InventoryStore;
use uuid::Uuid;

use crate::context::RequestContext;
use crate::locks::FolderLocks;
use crate::resolver::FolderResolver;

/// The inventory tree service shared across requests.
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
    locks: FolderLocks,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self {
            store,
            locks: FolderLocks::new(),
        }
    }

    /// Store handle, for callers that need raw lookups.
    pub fn store(&self) -> Arc<dyn InventoryStore> {
        self.store.clone()
    }

    fn resolver(&self, ctx: &RequestContext) -> FolderResolver {
        FolderResolver::new(self.store.clone(), ctx.owner)
    }

    /// Current version of a folder, if it still exists. Used after
    /// mutations to report updated category versions.
    async fn current_folder(&self, owner: Uuid, id: Uuid) -> AppResult<Option<Folder>> {
        self.store.folder(owner, id).await
    }
}
