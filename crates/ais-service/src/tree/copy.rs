//! COPY of categories and items: deep clones with fresh identities.

use std::collections::VecDeque;

use serde_json::{Map, Value, json};
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, Folder, PermissionMask};

use crate::context::RequestContext;
use crate::wire::{folder_value, item_value};

use super::InventoryService;

/// One cloned folder in the breadth-first copy arena. Children have
/// higher indices than their parent, so assembly runs in reverse.
struct CopyNode {
    value: Value,
    items: Vec<(Uuid, Value)>,
    links: Vec<(Uuid, Value)>,
    children: Vec<usize>,
}

impl CopyNode {
    fn new(value: Value) -> Self {
        Self {
            value,
            items: Vec::new(),
            links: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl InventoryService {
    /// COPY of a category: clone the whole subtree under the destination
    /// with fresh identities everywhere.
    ///
    /// The response embeds the cloned subtree and enumerates every
    /// created id plus the destination's new version. The walk reads the
    /// source through the store, so the source vanishing mid-walk simply
    /// truncates that branch; the source root vanishing up front is Gone.
    pub async fn copy_category(
        &self,
        ctx: &RequestContext,
        token: &str,
        dest_token: &str,
    ) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let dest = resolver
            .resolve(dest_token)
            .await
            .map_err(|_| AppError::not_found("Destination category not found"))?;
        let source = resolver
            .resolve(token)
            .await
            .map_err(|_| AppError::gone("Source category gone"))?;
        let _guard = self.locks.lock(dest.id).await;

        let mut created_categories: Vec<String> = Vec::new();
        let mut created_items: Vec<String> = Vec::new();
        let mut nodes: Vec<CopyNode> = Vec::new();

        // Clones of system folders are ordinary folders; the singleton
        // tag must not be duplicated.
        let root_clone = self
            .store
            .add_folder(Folder {
                id: Uuid::nil(),
                name: source.name.clone(),
                parent_id: dest.id,
                default_type: AssetType::Unknown,
                version: 1,
                owner_id: ctx.owner,
            })
            .await?;
        created_categories.push(root_clone.id.to_string());
        nodes.push(CopyNode::new(folder_value(&root_clone, ctx)));

        let mut queue: VecDeque<(Uuid, Uuid, usize)> = VecDeque::new();
        queue.push_back((source.id, root_clone.id, 0));
        while let Some((src_id, clone_id, idx)) = queue.pop_front() {
            let Some(content) = self.store.content(ctx.owner, src_id).await? else {
                continue;
            };
            for item in content.items {
                let mut copy = item.clone();
                copy.id = Uuid::nil();
                copy.parent_id = clone_id;
                let copy = self.store.add_item(copy).await?;
                created_items.push(copy.id.to_string());
                let value = item_value(&copy, ctx);
                if copy.is_link() {
                    nodes[idx].links.push((copy.id, value));
                } else {
                    nodes[idx].items.push((copy.id, value));
                }
            }
            for child in content.folders {
                let child_clone = self
                    .store
                    .add_folder(Folder {
                        id: Uuid::nil(),
                        name: child.name.clone(),
                        parent_id: clone_id,
                        default_type: AssetType::Unknown,
                        version: 1,
                        owner_id: ctx.owner,
                    })
                    .await?;
                created_categories.push(child_clone.id.to_string());
                let child_idx = nodes.len();
                nodes.push(CopyNode::new(folder_value(&child_clone, ctx)));
                nodes[idx].children.push(child_idx);
                queue.push_back((child.id, child_clone.id, child_idx));
            }
        }

        let mut built: Vec<Option<Value>> = Vec::with_capacity(nodes.len());
        built.resize_with(nodes.len(), || None);
        for idx in (0..nodes.len()).rev() {
            let node = std::mem::replace(&mut nodes[idx], CopyNode::new(Value::Null));
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
        if let Some(folder) = self.current_folder(ctx.owner, dest.id).await? {
            versions.insert(folder.id.to_string(), json!(folder.version));
        }
        value["_updated_category_versions"] = Value::Object(versions);
        Ok(value)
    }

    /// COPY of a single item under a new parent.
    ///
    /// The owner's effective mask must carry the copy bit.
    pub async fn copy_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        dest_token: &str,
    ) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let dest = resolver
            .resolve(dest_token)
            .await
            .map_err(|_| AppError::not_found("Destination category not found"))?;
        let item = self
            .store
            .item(ctx.owner, id)
            .await?
            .ok_or_else(|| AppError::gone("Source item gone"))?;
        if !item.permissions.current.contains(PermissionMask::COPY) {
            return Err(AppError::forbidden("Forbidden"));
        }
        let _guard = self.locks.lock(dest.id).await;

        let mut copy = item;
        copy.id = Uuid::nil();
        copy.parent_id = dest.id;
        let copy = self.store.add_item(copy).await?;

        let mut value = item_value(&copy, ctx);
        value["_created_items"] = json!([copy.id.to_string()]);
        let mut versions = Map::new();
        if let Some(folder) = self.current_folder(ctx.owner, dest.id).await? {
            versions.insert(folder.id.to_string(), json!(folder.version));
        }
        value["_updated_category_versions"] = Value::Object(versions);
        Ok(value)
    }
}
