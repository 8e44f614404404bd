//! # ais-core
//!
//! Core crate for the AISv3 inventory server. Contains configuration
//! schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other AIS crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
