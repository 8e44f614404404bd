//! Folder (category) domain entities.

pub mod model;

pub use model::{Folder, FolderContent};
