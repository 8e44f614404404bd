//! Folder entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::Item;
use crate::types::AssetType;

/// A folder (category) in the inventory hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (`Uuid::nil()` only on the per-owner root).
    pub parent_id: Uuid,
    /// Preferred content kind; `Unknown` for ordinary user folders,
    /// anything else marks a per-owner system folder singleton.
    pub default_type: AssetType,
    /// Store-maintained counter, bumped whenever the direct child set
    /// changes. Clients use it for cache invalidation.
    pub version: i32,
    /// The folder owner.
    pub owner_id: Uuid,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_nil()
    }

    /// Check if this is a system folder (never user-deletable or movable).
    pub fn is_system(&self) -> bool {
        self.default_type != AssetType::Unknown
    }
}

/// The direct children of a folder, fetched as a unit.
///
/// Derived, never persisted; used as the traversal frontier for
/// cascading operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderContent {
    /// Direct child folders.
    pub folders: Vec<Folder>,
    /// Direct child items.
    pub items: Vec<Item>,
}
