//! Item permission masks.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A single permission mask, wire-encoded as an integer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PermissionMask: u32 {
        const TRANSFER = 1 << 13;
        const MODIFY = 1 << 14;
        const COPY = 1 << 15;
        const MOVE = 1 << 19;
        const DAMAGE = 1 << 20;
        const ALL = 0x7FFF_FFFF;
    }
}

impl PermissionMask {
    /// Decode a raw wire integer, keeping unknown bits.
    pub fn from_wire(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }
}

impl Default for PermissionMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// The five permission masks attached to every owned item.
///
/// `current`, `group`, `next_owner`, and `everyone` must each be a
/// subset of `base`; [`Permissions::clamp_to_base`] enforces this after
/// wire updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Upper bound for every other mask.
    pub base: PermissionMask,
    /// The current owner's effective mask (`owner_mask` on the wire).
    pub current: PermissionMask,
    /// Group members' mask.
    pub group: PermissionMask,
    /// Mask granted to the next owner on transfer.
    pub next_owner: PermissionMask,
    /// Mask granted to everyone.
    pub everyone: PermissionMask,
}

impl Permissions {
    /// Fully open permissions, used for freshly created content and
    /// synthesized for link items.
    pub fn open() -> Self {
        Self {
            base: PermissionMask::ALL,
            current: PermissionMask::ALL,
            group: PermissionMask::empty(),
            next_owner: PermissionMask::ALL,
            everyone: PermissionMask::empty(),
        }
    }

    /// Re-establish the subset invariant after a wire update.
    pub fn clamp_to_base(&mut self) {
        self.current &= self.base;
        self.group &= self.base;
        self.next_owner &= self.base;
        self.everyone &= self.base;
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::open()
    }
}
