//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{AssetType, InventoryType};

use super::flags::InventoryFlags;
use super::permissions::Permissions;
use super::sale::SaleInfo;

/// An inventory item.
///
/// For `Link`/`LinkFolder` asset types, `asset_id` names another item or
/// folder instead of stored content; such items never carry meaningful
/// flags, sale info, or permissions of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// Content reference, or link target for `Link`/`LinkFolder`.
    pub asset_id: Uuid,
    /// Content kind of the referenced asset.
    pub asset_type: AssetType,
    /// Client-facing classification.
    pub inventory_type: InventoryType,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// The folder containing this item.
    pub parent_id: Uuid,
    /// Flag bits (gesture active, ...).
    pub flags: InventoryFlags,
    /// The five permission masks.
    pub permissions: Permissions,
    /// Sale price and mode.
    pub sale_info: SaleInfo,
    /// The item owner.
    pub owner_id: Uuid,
    /// The original creator.
    pub creator_id: Uuid,
    /// The previous owner.
    pub last_owner_id: Uuid,
    /// Owning group, nil when none.
    pub group_id: Uuid,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Whether this item is a symbolic link to another item or folder.
    pub fn is_link(&self) -> bool {
        self.asset_type.is_link()
    }

    /// Whether this item is a gesture currently activated by its owner.
    pub fn is_active_gesture(&self) -> bool {
        self.asset_type == AssetType::Gesture
            && self.flags.contains(InventoryFlags::GESTURE_ACTIVE)
    }

    /// A blank item owned and created by `owner`, parented to `parent_id`.
    pub fn new(owner: Uuid, parent_id: Uuid) -> Self {
        Self {
            id: Uuid::nil(),
            asset_id: Uuid::nil(),
            asset_type: AssetType::Unknown,
            inventory_type: InventoryType::Unknown,
            name: String::new(),
            description: String::new(),
            parent_id,
            flags: InventoryFlags::empty(),
            permissions: Permissions::open(),
            sale_info: SaleInfo::default(),
            owner_id: owner,
            creator_id: owner,
            last_owner_id: owner,
            group_id: Uuid::nil(),
            created_at: Utc::now(),
        }
    }
}
