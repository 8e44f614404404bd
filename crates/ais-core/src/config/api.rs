//! Inventory API configuration.

use serde::{Deserialize, Serialize};

/// Settings for the inventory API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Externally visible base URL, used when rendering `_links` hrefs
    /// and when validating `Destination` headers on MOVE/COPY.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum recursion depth accepted for `depth=*` folder reads.
    /// Walks are iterative; this only bounds response size.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_public_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_max_depth() -> u32 {
    u32::MAX
}
