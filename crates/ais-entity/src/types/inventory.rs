//! Inventory type enumeration (`inv_type` on the wire).

use serde::{Deserialize, Serialize};

/// Client-facing classification of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum InventoryType {
    Unknown,
    Texture,
    Sound,
    CallingCard,
    Landmark,
    Object,
    Notecard,
    Folder,
    RootFolder,
    Lsl,
    Snapshot,
    Attachable,
    Wearable,
    Animation,
    Gesture,
}

impl InventoryType {
    /// Numeric protocol code.
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::Texture => 0,
            Self::Sound => 1,
            Self::CallingCard => 2,
            Self::Landmark => 3,
            Self::Object => 6,
            Self::Notecard => 7,
            Self::Folder => 8,
            Self::RootFolder => 9,
            Self::Lsl => 10,
            Self::Snapshot => 15,
            Self::Attachable => 17,
            Self::Wearable => 18,
            Self::Animation => 19,
            Self::Gesture => 20,
        }
    }

    /// Decode a numeric protocol code, lenient on unknown values.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Texture,
            1 => Self::Sound,
            2 => Self::CallingCard,
            3 => Self::Landmark,
            6 => Self::Object,
            7 => Self::Notecard,
            8 => Self::Folder,
            9 => Self::RootFolder,
            10 => Self::Lsl,
            15 => Self::Snapshot,
            17 => Self::Attachable,
            18 => Self::Wearable,
            19 => Self::Animation,
            20 => Self::Gesture,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for InventoryType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<InventoryType> for i32 {
    fn from(ty: InventoryType) -> i32 {
        ty.code()
    }
}
