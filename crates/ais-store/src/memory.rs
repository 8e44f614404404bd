//! In-memory inventory store.
//!
//! Backs the server binary and the test suite. All entities live in a
//! single `RwLock`-guarded table pair so that version bumps and child
//! mutations observe a consistent snapshot.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, Folder, FolderContent, Item};

use crate::store::InventoryStore;

#[derive(Default)]
struct Tables {
    folders: HashMap<Uuid, Folder>,
    items: HashMap<Uuid, Item>,
}

impl Tables {
    fn bump_version(&mut self, folder_id: Uuid) {
        if let Some(folder) = self.folders.get_mut(&folder_id) {
            folder.version += 1;
        }
    }

    /// Walk the parent chain of `start` looking for `needle`.
    fn is_ancestor_or_self(&self, needle: Uuid, start: Uuid) -> bool {
        let mut current = start;
        loop {
            if current == needle {
                return true;
            }
            match self.folders.get(&current) {
                Some(folder) if !folder.parent_id.is_nil() => current = folder.parent_id,
                _ => return false,
            }
        }
    }
}

/// An in-process [`InventoryStore`] keyed by entity ID, owner-scoped on
/// every lookup.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a per-owner skeleton: a root folder plus the trash system
    /// folder. Returns the root.
    pub fn seed_owner(&self, owner: Uuid) -> Folder {
        let mut tables = self.tables.write().expect("store lock poisoned");
        let root = Folder {
            id: Uuid::new_v4(),
            name: "My Inventory".to_string(),
            parent_id: Uuid::nil(),
            default_type: AssetType::RootFolder,
            version: 1,
            owner_id: owner,
        };
        let trash = Folder {
            id: Uuid::new_v4(),
            name: "Trash".to_string(),
            parent_id: root.id,
            default_type: AssetType::TrashFolder,
            version: 1,
            owner_id: owner,
        };
        tables.folders.insert(root.id, root.clone());
        tables.folders.insert(trash.id, trash);
        root
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tables> {
        self.tables.read().expect("store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.tables.write().expect("store lock poisoned")
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn folder(&self, owner: Uuid, id: Uuid) -> AppResult<Option<Folder>> {
        let tables = self.read();
        Ok(tables
            .folders
            .get(&id)
            .filter(|f| f.owner_id == owner)
            .cloned())
    }

    async fn folder_by_type(&self, owner: Uuid, kind: AssetType) -> AppResult<Option<Folder>> {
        let tables = self.read();
        Ok(tables
            .folders
            .values()
            .find(|f| f.owner_id == owner && f.default_type == kind)
            .cloned())
    }

    async fn item(&self, owner: Uuid, id: Uuid) -> AppResult<Option<Item>> {
        let tables = self.read();
        Ok(tables
            .items
            .get(&id)
            .filter(|i| i.owner_id == owner)
            .cloned())
    }

    async fn content(&self, owner: Uuid, folder_id: Uuid) -> AppResult<Option<FolderContent>> {
        let tables = self.read();
        if !tables
            .folders
            .get(&folder_id)
            .is_some_and(|f| f.owner_id == owner)
        {
            return Ok(None);
        }
        let folders = tables
            .folders
            .values()
            .filter(|f| f.owner_id == owner && f.parent_id == folder_id)
            .cloned()
            .collect();
        let items = tables
            .items
            .values()
            .filter(|i| i.owner_id == owner && i.parent_id == folder_id)
            .cloned()
            .collect();
        Ok(Some(FolderContent { folders, items }))
    }

    async fn items_of(&self, owner: Uuid, folder_id: Uuid) -> AppResult<Vec<Item>> {
        let tables = self.read();
        Ok(tables
            .items
            .values()
            .filter(|i| i.owner_id == owner && i.parent_id == folder_id)
            .cloned()
            .collect())
    }

    async fn add_folder(&self, mut folder: Folder) -> AppResult<Folder> {
        let mut tables = self.write();
        if !folder.parent_id.is_nil()
            && !tables
                .folders
                .get(&folder.parent_id)
                .is_some_and(|f| f.owner_id == folder.owner_id)
        {
            return Err(AppError::invalid_parent("Parent category not found"));
        }
        folder.id = Uuid::new_v4();
        let parent_id = folder.parent_id;
        tables.folders.insert(folder.id, folder.clone());
        tables.bump_version(parent_id);
        Ok(folder)
    }

    async fn add_item(&self, mut item: Item) -> AppResult<Item> {
        let mut tables = self.write();
        if !tables
            .folders
            .get(&item.parent_id)
            .is_some_and(|f| f.owner_id == item.owner_id)
        {
            return Err(AppError::invalid_parent("Parent category not found"));
        }
        item.id = Uuid::new_v4();
        let parent_id = item.parent_id;
        tables.items.insert(item.id, item.clone());
        tables.bump_version(parent_id);
        Ok(item)
    }

    async fn update_folder(&self, folder: &Folder) -> AppResult<()> {
        let mut tables = self.write();
        match tables.folders.get_mut(&folder.id) {
            Some(existing) if existing.owner_id == folder.owner_id => {
                existing.name = folder.name.clone();
                existing.default_type = folder.default_type;
                Ok(())
            }
            _ => Err(AppError::not_found("Category not found")),
        }
    }

    async fn update_item(&self, item: &Item) -> AppResult<()> {
        let mut tables = self.write();
        match tables.items.get_mut(&item.id) {
            Some(existing) if existing.owner_id == item.owner_id => {
                *existing = item.clone();
                Ok(())
            }
            _ => Err(AppError::not_found("Item not found")),
        }
    }

    async fn delete_folder(&self, owner: Uuid, id: Uuid) -> AppResult<bool> {
        let mut tables = self.write();
        match tables.folders.get(&id) {
            Some(folder) if folder.owner_id == owner => {
                let parent_id = folder.parent_id;
                tables.folders.remove(&id);
                tables.bump_version(parent_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_item(&self, owner: Uuid, id: Uuid) -> AppResult<bool> {
        let mut tables = self.write();
        match tables.items.get(&id) {
            Some(item) if item.owner_id == owner => {
                let parent_id = item.parent_id;
                tables.items.remove(&id);
                tables.bump_version(parent_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn move_folder(&self, owner: Uuid, id: Uuid, new_parent: Uuid) -> AppResult<()> {
        let mut tables = self.write();
        if !tables
            .folders
            .get(&id)
            .is_some_and(|f| f.owner_id == owner)
        {
            return Err(AppError::not_found("Category not found"));
        }
        if !tables
            .folders
            .get(&new_parent)
            .is_some_and(|f| f.owner_id == owner)
        {
            return Err(AppError::invalid_parent("Destination category not found"));
        }
        if tables.is_ancestor_or_self(id, new_parent) {
            return Err(AppError::invalid_parent(
                "Cannot move a category into itself or its descendants",
            ));
        }
        let old_parent = tables.folders[&id].parent_id;
        if let Some(folder) = tables.folders.get_mut(&id) {
            folder.parent_id = new_parent;
        }
        tables.bump_version(old_parent);
        tables.bump_version(new_parent);
        Ok(())
    }

    async fn move_item(&self, owner: Uuid, id: Uuid, new_parent: Uuid) -> AppResult<()> {
        let mut tables = self.write();
        if !tables.items.get(&id).is_some_and(|i| i.owner_id == owner) {
            return Err(AppError::not_found("Item not found"));
        }
        if !tables
            .folders
            .get(&new_parent)
            .is_some_and(|f| f.owner_id == owner)
        {
            return Err(AppError::invalid_parent("Destination category not found"));
        }
        let old_parent = tables.items[&id].parent_id;
        if let Some(item) = tables.items.get_mut(&id) {
            item.parent_id = new_parent;
        }
        tables.bump_version(old_parent);
        tables.bump_version(new_parent);
        Ok(())
    }
}
