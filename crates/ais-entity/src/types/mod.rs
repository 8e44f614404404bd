//! Protocol enumerations and their numeric wire codes.

pub mod asset;
pub mod inventory;

pub use asset::AssetType;
pub use inventory::InventoryType;
