//! The inventory store trait consumed by the tree-mutation core.

use async_trait::async_trait;
use uuid::Uuid;

use ais_core::AppResult;
use ais_entity::{AssetType, Folder, FolderContent, Item};

/// Folder/item CRUD primitives exposed by an inventory backend.
///
/// Folder `version` counters are store-maintained: any operation that
/// changes a folder's direct child set (add, remove, reparent) bumps the
/// affected folder's version. The core only reads versions for
/// reporting, never computes them.
///
/// Deletes are idempotent at this layer: deleting an absent entity
/// returns `Ok(false)` rather than an error, and the core decides
/// whether to surface it.
#[async_trait]
pub trait InventoryStore: Send + Sync + 'static {
    /// Fetch a folder by ID.
    async fn folder(&self, owner: Uuid, id: Uuid) -> AppResult<Option<Folder>>;

    /// Fetch the per-owner system folder singleton tagged with `kind`.
    async fn folder_by_type(&self, owner: Uuid, kind: AssetType) -> AppResult<Option<Folder>>;

    /// Fetch an item by ID.
    async fn item(&self, owner: Uuid, id: Uuid) -> AppResult<Option<Item>>;

    /// Fetch a folder's direct children (folders and items) as a unit.
    /// `None` when the folder itself does not exist.
    async fn content(&self, owner: Uuid, folder_id: Uuid) -> AppResult<Option<FolderContent>>;

    /// Fetch only the direct items of a folder.
    async fn items_of(&self, owner: Uuid, folder_id: Uuid) -> AppResult<Vec<Item>>;

    /// Create a folder, assigning a fresh random identity.
    ///
    /// Fails with `InvalidParent` when the parent does not resolve.
    async fn add_folder(&self, folder: Folder) -> AppResult<Folder>;

    /// Create an item, assigning a fresh random identity.
    ///
    /// Fails with `InvalidParent` when the parent folder does not resolve.
    async fn add_item(&self, item: Item) -> AppResult<Item>;

    /// Update a folder in place. `NotFound` when it no longer exists.
    async fn update_folder(&self, folder: &Folder) -> AppResult<()>;

    /// Update an item in place. `NotFound` when it no longer exists.
    async fn update_item(&self, item: &Item) -> AppResult<()>;

    /// Delete a folder. Returns `false` when it was already absent.
    async fn delete_folder(&self, owner: Uuid, id: Uuid) -> AppResult<bool>;

    /// Delete an item. Returns `false` when it was already absent.
    async fn delete_item(&self, owner: Uuid, id: Uuid) -> AppResult<bool>;

    /// Reparent a folder. `NotFound` when the folder vanished,
    /// `InvalidParent` when the destination does not resolve or the move
    /// would create a cycle.
    async fn move_folder(&self, owner: Uuid, id: Uuid, new_parent: Uuid) -> AppResult<()>;

    /// Reparent an item. `NotFound` when the item vanished,
    /// `InvalidParent` when the destination does not resolve.
    async fn move_item(&self, owner: Uuid, id: Uuid, new_parent: Uuid) -> AppResult<()>;
}
