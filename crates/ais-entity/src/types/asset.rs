//! Asset type enumeration.
//!
//! The numeric codes are part of the wire protocol and must not change.
//! A folder's `default_type` uses the same enumeration to tag per-owner
//! system folder singletons (root, trash, texture, ...), each of which
//! has a fixed URL alias understood by the folder resolver.

use serde::{Deserialize, Serialize};

/// Content kind of an item's asset, also used as a folder's preferred
/// content kind (`type_default` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AssetType {
    Unknown,
    Texture,
    Sound,
    CallingCard,
    Landmark,
    Clothing,
    Object,
    Notecard,
    RootFolder,
    LslText,
    Bodypart,
    TrashFolder,
    SnapshotFolder,
    LostAndFoundFolder,
    Animation,
    Gesture,
    FavoriteFolder,
    Link,
    LinkFolder,
    CurrentOutfitFolder,
    OutfitFolder,
    MyOutfitsFolder,
    Inbox,
    Outbox,
}

impl AssetType {
    /// Numeric protocol code.
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::Texture => 0,
            Self::Sound => 1,
            Self::CallingCard => 2,
            Self::Landmark => 3,
            Self::Clothing => 5,
            Self::Object => 6,
            Self::Notecard => 7,
            Self::RootFolder => 8,
            Self::LslText => 10,
            Self::Bodypart => 13,
            Self::TrashFolder => 14,
            Self::SnapshotFolder => 15,
            Self::LostAndFoundFolder => 16,
            Self::Animation => 20,
            Self::Gesture => 21,
            Self::FavoriteFolder => 23,
            Self::Link => 24,
            Self::LinkFolder => 25,
            Self::CurrentOutfitFolder => 46,
            Self::OutfitFolder => 47,
            Self::MyOutfitsFolder => 48,
            Self::Inbox => 50,
            Self::Outbox => 51,
        }
    }

    /// Decode a numeric protocol code; codes outside the table decode
    /// as `Unknown` rather than failing, matching lenient wire parsing.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Texture,
            1 => Self::Sound,
            2 => Self::CallingCard,
            3 => Self::Landmark,
            5 => Self::Clothing,
            6 => Self::Object,
            7 => Self::Notecard,
            8 => Self::RootFolder,
            10 => Self::LslText,
            13 => Self::Bodypart,
            14 => Self::TrashFolder,
            15 => Self::SnapshotFolder,
            16 => Self::LostAndFoundFolder,
            20 => Self::Animation,
            21 => Self::Gesture,
            23 => Self::FavoriteFolder,
            24 => Self::Link,
            25 => Self::LinkFolder,
            46 => Self::CurrentOutfitFolder,
            47 => Self::OutfitFolder,
            48 => Self::MyOutfitsFolder,
            50 => Self::Inbox,
            51 => Self::Outbox,
            _ => Self::Unknown,
        }
    }

    /// Whether this type marks an item as a symbolic link.
    pub fn is_link(self) -> bool {
        matches!(self, Self::Link | Self::LinkFolder)
    }

    /// Resolve a system-folder URL alias (`"root"`, `"trash"`, ...).
    ///
    /// Returns `None` for anything outside the fixed alias set, in which
    /// case the caller falls back to UUID parsing.
    pub fn from_alias(alias: &str) -> Option<Self> {
        Some(match alias {
            "animatn" => Self::Animation,
            "bodypart" => Self::Bodypart,
            "clothing" => Self::Clothing,
            "current" => Self::CurrentOutfitFolder,
            "favorite" => Self::FavoriteFolder,
            "gesture" => Self::Gesture,
            "inbox" => Self::Inbox,
            "landmark" => Self::Landmark,
            "lsltext" => Self::LslText,
            "lstndfnd" => Self::LostAndFoundFolder,
            "my_otfts" => Self::MyOutfitsFolder,
            "notecard" => Self::Notecard,
            "object" => Self::Object,
            "outbox" => Self::Outbox,
            "root" => Self::RootFolder,
            "snapshot" => Self::SnapshotFolder,
            "sound" => Self::Sound,
            "texture" => Self::Texture,
            "trash" => Self::TrashFolder,
            _ => return None,
        })
    }
}

impl From<i32> for AssetType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<AssetType> for i32 {
    fn from(ty: AssetType) -> i32 {
        ty.code()
    }
}
