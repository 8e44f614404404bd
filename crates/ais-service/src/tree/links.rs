//! PUT replacement of a category's link set.

use std::collections::HashMap;

use serde_json::{Map, Value, json};
use tracing::debug;
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, Folder, InventoryType, Item};

use crate::context::RequestContext;
use crate::results::MutationSummary;
use crate::wire::{folder_value, item_value};

use super::InventoryService;

impl InventoryService {
    /// PUT of a category's links: drop every existing link item, then
    /// materialize the new set from a wire array.
    ///
    /// Each entry needs `linked_id`, `name`, and a link `type`; targets
    /// are resolved once through a dedup map, and entries whose target
    /// does not resolve are dropped rather than stored broken. Link
    /// items inherit the inventory type of their target item.
    pub async fn replace_category_links(
        &self,
        ctx: &RequestContext,
        token: &str,
        body: Value,
    ) -> AppResult<Value> {
        let entries = body
            .as_array()
            .cloned()
            .ok_or_else(|| AppError::bad_request("Bad request"))?;
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let _guard = self.locks.lock(folder.id).await;

        let mut summary = MutationSummary::new();
        for item in self.store.items_of(ctx.owner, folder.id).await? {
            if item.is_link() && self.store.delete_item(ctx.owner, item.id).await? {
                summary.add_removed_item(&item);
            }
        }

        let mut item_targets: HashMap<Uuid, Option<Item>> = HashMap::new();
        let mut folder_targets: HashMap<Uuid, Option<Folder>> = HashMap::new();
        let mut links = Map::new();
        let mut linked_ids = Map::new();
        let mut created: Vec<String> = Vec::new();

        for entry in entries {
            let Some(spec) = LinkSpec::parse(&entry) else {
                debug!(category = %folder.id, "malformed link entry skipped");
                continue;
            };
            let embedded = match spec.kind {
                AssetType::Link => {
                    let target = match item_targets.get(&spec.target) {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = self.store.item(ctx.owner, spec.target).await?;
                            item_targets.insert(spec.target, fetched.clone());
                            fetched
                        }
                    };
                    match target {
                        Some(target) => json!({ "item": item_value(&target, ctx) }),
                        None => {
                            debug!(target = %spec.target, "unresolvable link target dropped");
                            continue;
                        }
                    }
                }
                AssetType::LinkFolder => {
                    let target = match folder_targets.get(&spec.target) {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = self.store.folder(ctx.owner, spec.target).await?;
                            folder_targets.insert(spec.target, fetched.clone());
                            fetched
                        }
                    };
                    match target {
                        Some(target) => json!({ "category": folder_value(&target, ctx) }),
                        None => {
                            debug!(target = %spec.target, "unresolvable link target dropped");
                            continue;
                        }
                    }
                }
                _ => return Err(AppError::internal("link entry with non-link type")),
            };

            let mut link = Item::new(ctx.owner, folder.id);
            link.name = spec.name;
            link.description = spec.description;
            link.asset_type = spec.kind;
            link.asset_id = spec.target;
            link.inventory_type = match spec.kind {
                AssetType::Link => item_targets[&spec.target]
                    .as_ref()
                    .map(|t| t.inventory_type)
                    .unwrap_or(InventoryType::Unknown),
                _ => InventoryType::Unknown,
            };
            let link = self.store.add_item(link).await?;

            let mut value = item_value(&link, ctx);
            value["_embedded"] = embedded;
            linked_ids.insert(link.id.to_string(), json!(spec.target.to_string()));
            created.push(link.id.to_string());
            links.insert(link.id.to_string(), value);
        }

        let mut versions = Map::new();
        if let Some(current) = self.current_folder(ctx.owner, folder.id).await? {
            versions.insert(current.id.to_string(), json!(current.version));
        }
        let mut removed = summary.into_value();
        Ok(json!({
            "_embedded": { "links": links },
            "_linked_ids": linked_ids,
            "_created_items": created,
            "_category_items_removed": removed["_category_items_removed"].take(),
            "_updated_category_versions": Value::Object(versions),
        }))
    }
}

struct LinkSpec {
    target: Uuid,
    name: String,
    description: String,
    kind: AssetType,
}

impl LinkSpec {
    fn parse(entry: &Value) -> Option<Self> {
        let target = entry
            .get("linked_id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())?;
        let name = entry.get("name").and_then(Value::as_str)?.to_string();
        let kind = AssetType::from_code(entry.get("type").and_then(Value::as_i64)? as i32);
        if !kind.is_link() {
            return None;
        }
        let description = entry
            .get("desc")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Some(Self {
            target,
            name,
            description,
            kind,
        })
    }
}
