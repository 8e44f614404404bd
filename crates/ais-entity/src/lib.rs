//! # ais-entity
//!
//! Domain entity models for the AISv3 inventory server: folders
//! (categories), items, links, permissions, sale info, and the protocol
//! enumerations with their numeric wire codes.

pub mod folder;
pub mod item;
pub mod types;

pub use folder::{Folder, FolderContent};
pub use item::{InventoryFlags, Item, PermissionMask, Permissions, SaleInfo, SaleType};
pub use types::{AssetType, InventoryType};
