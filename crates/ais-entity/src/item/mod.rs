//! Item domain entities.

pub mod flags;
pub mod model;
pub mod permissions;
pub mod sale;

pub use flags::InventoryFlags;
pub use model::Item;
pub use permissions::{PermissionMask, Permissions};
pub use sale::{SaleInfo, SaleType};
