//! # ais-store
//!
//! The inventory store boundary. [`InventoryStore`] is the async trait
//! the tree-mutation core consumes; [`MemoryStore`] is the in-process
//! reference implementation backing the server binary and the test
//! suite. A persistent backend implements the same trait.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::InventoryStore;
