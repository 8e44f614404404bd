//! # ais-api
//!
//! HTTP layer for the AISv3 inventory server built on Axum.
//!
//! Routes live under `/api/inventory/{agent_id}`; the non-standard MOVE
//! and COPY verbs are handled by method dispatch inside the handlers,
//! mirroring the protocol's method table.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
