//! Item flag bits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-item flag bits carried on the wire as a plain integer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct InventoryFlags: u32 {
        /// The gesture is currently activated by the owner.
        const GESTURE_ACTIVE = 1;
    }
}

impl InventoryFlags {
    /// Decode a raw wire integer, keeping unknown bits.
    pub fn from_wire(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }
}
