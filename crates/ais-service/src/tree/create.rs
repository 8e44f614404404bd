//! POST bulk creation of items, links, and nested categories.

use std::collections::VecDeque;

use serde_json::{Map, Value, json};
use tracing::debug;
use uuid::Uuid;

use ais_core::AppResult;

use crate::context::RequestContext;
use crate::wire::{folder_from_wire, folder_value, item_from_wire, item_value};

use super::InventoryService;

struct CreateNode {
    value: Value,
    items: Vec<(Uuid, Value)>,
    links: Vec<(Uuid, Value)>,
    children: Vec<usize>,
}

impl CreateNode {
    fn new(value: Value) -> Self {
        Self {
            value,
            items: Vec::new(),
            links: Vec::new(),
            children: Vec::new(),
        }
    }
}

fn embedded_array<'a>(embedded: &'a Value, key: &str) -> &'a [Value] {
    embedded
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

impl InventoryService {
    /// POST into a category: create the embedded items, links, and
    /// categories, recursing into each new category's own payload via a
    /// work queue.
    ///
    /// Malformed entries are skipped, never fatal; the response lists
    /// exactly what was created plus the new version of every folder
    /// whose child set changed.
    pub async fn create_in_category(
        &self,
        ctx: &RequestContext,
        token: &str,
        body: Value,
    ) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let _guard = self.locks.lock(folder.id).await;

        let mut created_categories: Vec<String> = Vec::new();
        let mut created_items: Vec<String> = Vec::new();
        let mut touched_parents: Vec<Uuid> = Vec::new();
        let mut nodes = vec![CreateNode::new(folder_value(&folder, ctx))];

        // Each entry pairs a created parent with the payload destined
        // for it.
        let mut queue: VecDeque<(Uuid, Value, usize)> = VecDeque::new();
        queue.push_back((folder.id, body, 0));
        while let Some((parent_id, embedded, idx)) = queue.pop_front() {
            for entry in embedded_array(&embedded, "items") {
                match item_from_wire(entry, ctx.owner, parent_id) {
                    Ok(item) => match self.store.add_item(item).await {
                        Ok(item) => {
                            created_items.push(item.id.to_string());
                            if !touched_parents.contains(&parent_id) {
                                touched_parents.push(parent_id);
                            }
                            nodes[idx].items.push((item.id, item_value(&item, ctx)));
                        }
                        Err(err) => debug!(%parent_id, error = %err, "item create skipped"),
                    },
                    Err(err) => debug!(%parent_id, error = %err, "malformed item skipped"),
                }
            }
            for entry in embedded_array(&embedded, "links") {
                match item_from_wire(entry, ctx.owner, parent_id) {
                    Ok(link) => match self.store.add_item(link).await {
                        Ok(link) => {
                            created_items.push(link.id.to_string());
                            if !touched_parents.contains(&parent_id) {
                                touched_parents.push(parent_id);
                            }
                            nodes[idx].links.push((link.id, item_value(&link, ctx)));
                        }
                        Err(err) => debug!(%parent_id, error = %err, "link create skipped"),
                    },
                    Err(err) => debug!(%parent_id, error = %err, "malformed link skipped"),
                }
            }
            for entry in embedded_array(&embedded, "categories") {
                let child = match folder_from_wire(entry, ctx.owner, parent_id) {
                    Ok(child) => child,
                    Err(err) => {
                        debug!(%parent_id, error = %err, "malformed category skipped");
                        continue;
                    }
                };
                match self.store.add_folder(child).await {
                    Ok(child) => {
                        created_categories.push(child.id.to_string());
                        if !touched_parents.contains(&parent_id) {
                            touched_parents.push(parent_id);
                        }
                        let child_idx = nodes.len();
                        nodes.push(CreateNode::new(folder_value(&child, ctx)));
                        nodes[idx].children.push(child_idx);
                        let nested = entry.get("_embedded").cloned().unwrap_or(Value::Null);
                        queue.push_back((child.id, nested, child_idx));
                    }
                    Err(err) => debug!(%parent_id, error = %err, "category create skipped"),
                }
            }
        }

        let mut built: Vec<Option<Value>> = Vec::with_capacity(nodes.len());
        built.resize_with(nodes.len(), || None);
        for idx in (0..nodes.len()).rev() {
            let node = std::mem::replace(&mut nodes[idx], CreateNode::new(Value::Null));
            let mut value = node.value;
            let mut categories = Map::new();
            for child_idx in node.children {
                let child = built[child_idx].take().unwrap_or(Value::Null);
                if let Some(id) = child.get("category_id").and_then(Value::as_str) {
                    let id = id.to_string();
                    categories.insert(id, child);
                }
            }
            let mut items = Map::new();
            for (id, item) in node.items {
                items.insert(id.to_string(), item);
            }
            let mut links = Map::new();
            for (id, link) in node.links {
                links.insert(id.to_string(), link);
            }
            value["_embedded"] = json!({
                "items": items,
                "categories": categories,
                "links": links,
            });
            built[idx] = Some(value);
        }

        let mut value = built[0].take().unwrap_or(Value::Null);
        value["_created_categories"] = json!(created_categories);
        value["_created_items"] = json!(created_items);
        let mut versions = Map::new();
        for parent_id in touched_parents {
            if let Some(parent) = self.current_folder(ctx.owner, parent_id).await? {
                versions.insert(parent.id.to_string(), json!(parent.version));
            }
        }
        value["_updated_category_versions"] = Value::Object(versions);
        Ok(value)
    }
}
