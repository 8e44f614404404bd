//! Request context carrying the authenticated owner and parsed options.

use uuid::Uuid;

/// Context for one inventory API request.
///
/// Built by the HTTP layer and passed into every service operation so
/// the engine knows *who* is acting and how deep to walk. Nothing here
/// outlives the request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated agent the inventory belongs to.
    pub owner: Uuid,
    /// Absolute URL prefix for this agent's inventory, used when
    /// rendering `_links` hrefs and validating `Destination` headers.
    pub base_url: String,
    /// Requested embedding depth for folder reads (0 = no children).
    pub depth: u32,
    /// Dry-run flag. Parsed and carried for protocol compatibility;
    /// mutating operations currently execute unconditionally.
    pub simulate: bool,
}

impl RequestContext {
    /// Creates a context with no embedding and no simulation.
    pub fn new(owner: Uuid, base_url: impl Into<String>) -> Self {
        Self {
            owner,
            base_url: base_url.into(),
            depth: 0,
            simulate: false,
        }
    }

    /// Href of a category resource under this request's prefix.
    pub fn category_href(&self, token: &str) -> String {
        format!("{}/category/{}", self.base_url, token)
    }

    /// Href of an item resource under this request's prefix.
    pub fn item_href(&self, id: Uuid) -> String {
        format!("{}/item/{}", self.base_url, id)
    }
}
