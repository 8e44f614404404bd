//! # ais-service
//!
//! The tree-consistency core of the AISv3 inventory server: per-request
//! folder resolution, the iterative tree-mutation engine (cascading
//! delete, deep copy, move, bulk create), link handling, mutation result
//! aggregation, and the wire-value mapping for folders and items.

pub mod context;
pub mod locks;
pub mod resolver;
pub mod results;
pub mod tree;
pub mod wire;

pub use context::RequestContext;
pub use resolver::FolderResolver;
pub use results::MutationSummary;
pub use tree::InventoryService;
