//! Application state shared across all handlers.

use std::sync::Arc;

use ais_core::config::AppConfig;
use ais_service::InventoryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The inventory tree service.
    pub inventory: Arc<InventoryService>,
}

impl AppState {
    pub fn new(config: AppConfig, inventory: InventoryService) -> Self {
        Self {
            config: Arc::new(config),
            inventory: Arc::new(inventory),
        }
    }
}
