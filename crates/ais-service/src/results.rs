//! Mutation result aggregation.
//!
//! Every destructive tree operation feeds one [`MutationSummary`], which
//! is finalized into the wire response at the end of the request. Item
//! classification (active gesture, link) happens exactly once per
//! removed item, at removal time, from the item's pre-deletion state.

use serde_json::{Map, Value, json};
use uuid::Uuid;

use ais_entity::{Folder, Item};

/// Accumulates the side effects of a mutating tree operation.
#[derive(Debug, Default)]
pub struct MutationSummary {
    active_gestures_removed: Vec<Uuid>,
    broken_links_removed: Vec<Uuid>,
    category_items_removed: Vec<Uuid>,
    categories_removed: Vec<Uuid>,
    updated_category_versions: Map<String, Value>,
}

impl MutationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a removed item, classifying it from pre-deletion state:
    /// active gestures and link items land in their dedicated
    /// collections in addition to the main removed list.
    pub fn add_removed_item(&mut self, item: &Item) {
        if item.is_active_gesture() {
            self.active_gestures_removed.push(item.id);
        }
        if item.is_link() {
            self.broken_links_removed.push(item.id);
        }
        self.category_items_removed.push(item.id);
    }

    /// Record the new version of a folder whose child set changed.
    pub fn add_updated_category(&mut self, folder: &Folder) {
        self.updated_category_versions
            .insert(folder.id.to_string(), json!(folder.version));
    }

    /// Record a removed folder.
    pub fn add_removed_category(&mut self, id: Uuid) {
        self.categories_removed.push(id);
    }

    /// Number of items removed so far.
    pub fn items_removed(&self) -> usize {
        self.category_items_removed.len()
    }

    /// Finalize into the wire response value.
    ///
    /// Attachment and wearable bookkeeping belongs to the appearance
    /// service; the collections are carried empty for wire shape
    /// compatibility.
    pub fn into_value(self) -> Value {
        json!({
            "_attachments_removed": {},
            "_active_gestures_removed": self.active_gestures_removed,
            "_broken_links_removed": self.broken_links_removed,
            "_wearables_removed": {},
            "_category_items_removed": self.category_items_removed,
            "_categories_removed": self.categories_removed,
            "_updated_category_versions": self.updated_category_versions,
            "_total_items_removed": self.category_items_removed.len(),
        })
    }
}
