//! Category and subtree reads.

use std::collections::VecDeque;

use serde_json::{Map, Value, json};
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, FolderContent};

use crate::context::RequestContext;
use crate::wire::{folder_value, item_value};

use super::InventoryService;

/// One folder visited during an embedding walk. Children always sit at
/// higher arena indices than their parent, so a reverse pass can fold
/// fully-built child values into each parent's `_embedded` block.
struct WalkNode {
    value: Value,
    items: Vec<(Uuid, Value)>,
    links: Vec<(Uuid, Value)>,
    children: Vec<usize>,
    embedded: bool,
}

impl WalkNode {
    fn new(value: Value) -> Self {
        Self {
            value,
            items: Vec::new(),
            links: Vec::new(),
            children: Vec::new(),
            embedded: false,
        }
    }
}

fn keyed(entries: Vec<(Uuid, Value)>) -> Value {
    let mut map = Map::new();
    for (id, value) in entries {
        map.insert(id.to_string(), value);
    }
    Value::Object(map)
}

impl InventoryService {
    /// GET of a category, embedding children down to `ctx.depth` levels.
    ///
    /// With `categories_only`, items and links are left out of every
    /// `_embedded` block (the `/categories` view).
    pub async fn get_category(
        &self,
        ctx: &RequestContext,
        token: &str,
        categories_only: bool,
    ) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let content = self
            .store
            .content(ctx.owner, folder.id)
            .await?
            .ok_or_else(|| AppError::not_found("Not Found"))?;

        let mut nodes = vec![WalkNode::new(folder_value(&folder, ctx))];
        let mut queue: VecDeque<(usize, FolderContent, u32)> = VecDeque::new();
        if ctx.depth > 0 {
            queue.push_back((0, content, 1));
        }
        while let Some((idx, content, depth)) = queue.pop_front() {
            nodes[idx].embedded = true;
            if !categories_only {
                for item in content.items {
                    let value = item_value(&item, ctx);
                    if item.is_link() {
                        nodes[idx].links.push((item.id, value));
                    } else {
                        nodes[idx].items.push((item.id, value));
                    }
                }
            }
            for child in content.folders {
                let child_idx = nodes.len();
                nodes.push(WalkNode::new(folder_value(&child, ctx)));
                nodes[idx].children.push(child_idx);
                if depth < ctx.depth {
                    // Each child's own content feeds the next level.
                    if let Some(child_content) = self.store.content(ctx.owner, child.id).await? {
                        queue.push_back((child_idx, child_content, depth + 1));
                    }
                }
            }
        }

        let mut built: Vec<Option<Value>> = Vec::with_capacity(nodes.len());
        built.resize_with(nodes.len(), || None);
        for idx in (0..nodes.len()).rev() {
            let node = std::mem::replace(&mut nodes[idx], WalkNode::new(Value::Null));
            let mut value = node.value;
            if node.embedded {
                let mut categories = Map::new();
                for child_idx in node.children {
                    let child = built[child_idx].take().unwrap_or(Value::Null);
                    if let Some(id) = child.get("category_id").and_then(Value::as_str) {
                        let id = id.to_string();
                        categories.insert(id, child);
                    }
                }
                let embedded = if categories_only {
                    json!({ "categories": categories })
                } else {
                    json!({
                        "items": keyed(node.items),
                        "categories": categories,
                        "links": keyed(node.links),
                    })
                };
                value["_embedded"] = embedded;
            }
            built[idx] = Some(value);
        }
        Ok(built[0].take().unwrap_or(Value::Null))
    }

    /// GET of a category's direct items and links, single level.
    pub async fn get_category_items(&self, ctx: &RequestContext, token: &str) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let folder_items = self.store.items_of(ctx.owner, folder.id).await?;

        let mut items = Vec::new();
        let mut links = Vec::new();
        for item in folder_items {
            let value = item_value(&item, ctx);
            if item.is_link() {
                links.push((item.id, value));
            } else {
                items.push((item.id, value));
            }
        }
        let mut value = folder_value(&folder, ctx);
        value["_base_uri"] = json!(ctx.category_href(&folder.id.to_string()));
        value["_embedded"] = json!({
            "items": keyed(items),
            "links": keyed(links),
        });
        Ok(value)
    }

    /// GET of a category's direct links, each embedding its target when
    /// it resolves. Broken links are returned without an embed.
    pub async fn get_category_links(&self, ctx: &RequestContext, token: &str) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let folder_items = self.store.items_of(ctx.owner, folder.id).await?;

        let mut links = Vec::new();
        for item in folder_items {
            if !item.is_link() {
                continue;
            }
            let mut value = item_value(&item, ctx);
            match item.asset_type {
                AssetType::Link => {
                    if let Some(target) = self.store.item(ctx.owner, item.asset_id).await? {
                        value["_embedded"] = json!({ "item": item_value(&target, ctx) });
                    }
                }
                AssetType::LinkFolder => {
                    if let Some(target) = resolver.get(item.asset_id).await? {
                        value["_embedded"] = json!({ "category": folder_value(&target, ctx) });
                    }
                }
                _ => {}
            }
            links.push((item.id, value));
        }
        let mut value = folder_value(&folder, ctx);
        value["_base_uri"] = json!(ctx.category_href(&folder.id.to_string()));
        value["_embedded"] = json!({ "links": keyed(links) });
        Ok(value)
    }
}
