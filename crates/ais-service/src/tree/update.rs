//! Single-entity reads and updates: item GET/PATCH, category PATCH.

use serde_json::{Value, json};
use uuid::Uuid;

use ais_core::{AppError, AppResult, ErrorKind};
use ais_entity::{AssetType, InventoryFlags, Item, PermissionMask, SaleType};

use crate::context::RequestContext;
use crate::wire::{folder_value, item_value};

use super::InventoryService;

impl InventoryService {
    /// GET of a single item. Link items resolve their target: on
    /// success the target representation is embedded, on failure the
    /// read still succeeds with `_broken: true`.
    pub async fn get_item(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Value> {
        let item = self
            .store
            .item(ctx.owner, id)
            .await?
            .ok_or_else(|| AppError::not_found("Not Found"))?;
        let mut value = item_value(&item, ctx);
        value["_base_uri"] = json!(ctx.item_href(item.id));
        self.embed_link_target(ctx, &item, &mut value).await?;
        Ok(value)
    }

    /// PATCH of an item.
    ///
    /// Link items accept target, name, and description only. Plain
    /// items additionally take sale info, flags, and permission masks;
    /// each updated mask is clamped to the base mask.
    pub async fn update_item(&self, ctx: &RequestContext, id: Uuid, body: Value) -> AppResult<Value> {
        let mut item = self
            .store
            .item(ctx.owner, id)
            .await?
            .ok_or_else(|| AppError::not_found("Not Found"))?;
        let _guard = self.locks.lock(item.parent_id).await;

        apply_item_patch(&mut item, &body);
        self.store.update_item(&item).await.map_err(|err| {
            if err.kind == ErrorKind::NotFound {
                AppError::gone("Item gone")
            } else {
                err
            }
        })?;

        let mut value = item_value(&item, ctx);
        value["_base_uri"] = json!(ctx.item_href(item.id));
        value["_updated_items"] = json!([item.id.to_string()]);
        if let Some(parent) = self.current_folder(ctx.owner, item.parent_id).await? {
            value["_updated_category_versions"] =
                json!({ parent.id.to_string(): parent.version });
        }
        self.embed_link_target(ctx, &item, &mut value).await?;
        Ok(value)
    }

    /// PATCH of a category: rename only.
    pub async fn rename_category(
        &self,
        ctx: &RequestContext,
        token: &str,
        body: Value,
    ) -> AppResult<Value> {
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::bad_request("Bad request"))?;
        let mut resolver = self.resolver(ctx);
        let mut folder = resolver.resolve(token).await?;
        folder.name = name.to_string();
        self.store.update_folder(&folder).await.map_err(|err| {
            if err.kind == ErrorKind::NotFound {
                AppError::gone("Category gone")
            } else {
                err
            }
        })?;
        Ok(folder_value(&folder, ctx))
    }

    /// Resolve a link item's target and embed it; mark `_broken` when
    /// it does not resolve. No-op for plain items.
    async fn embed_link_target(
        &self,
        ctx: &RequestContext,
        item: &Item,
        value: &mut Value,
    ) -> AppResult<()> {
        match item.asset_type {
            AssetType::Link => {
                if let Some(target) = self.store.item(ctx.owner, item.asset_id).await? {
                    value["_embedded"] = json!({ "item": item_value(&target, ctx) });
                    value["_broken"] = json!(false);
                } else {
                    value["_broken"] = json!(true);
                }
            }
            AssetType::LinkFolder => {
                if let Some(target) = self.store.folder(ctx.owner, item.asset_id).await? {
                    value["_embedded"] = json!({ "category": folder_value(&target, ctx) });
                    value["_broken"] = json!(false);
                } else {
                    value["_broken"] = json!(true);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn apply_item_patch(item: &mut Item, body: &Value) {
    if let Some(name) = body.get("name").and_then(Value::as_str) {
        item.name = name.to_string();
    }
    if let Some(desc) = body.get("desc").and_then(Value::as_str) {
        item.description = desc.to_string();
    }
    if item.is_link() {
        if let Some(target) = body
            .get("linked_id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
        {
            item.asset_id = target;
        }
        return;
    }
    if let Some(asset) = body
        .get("asset_id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
    {
        item.asset_id = asset;
    }
    if let Some(sale) = body.get("sale_info") {
        if let Some(price) = sale.get("sale_price").and_then(Value::as_i64) {
            item.sale_info.price = price as i32;
        }
        if let Some(kind) = sale.get("sale_type").and_then(Value::as_i64) {
            item.sale_info.sale_type = SaleType::from_code(kind as i32);
        }
    }
    if let Some(raw) = body.get("flags").and_then(Value::as_u64) {
        item.flags = InventoryFlags::from_wire(raw as u32);
    }
    if let Some(perms) = body.get("permissions") {
        let base = item.permissions.base;
        if let Some(raw) = perms.get("owner_mask").and_then(Value::as_u64) {
            item.permissions.current = PermissionMask::from_wire(raw as u32) & base;
        }
        if let Some(raw) = perms.get("everyone_mask").and_then(Value::as_u64) {
            item.permissions.everyone = PermissionMask::from_wire(raw as u32) & base;
        }
        if let Some(raw) = perms.get("next_owner_mask").and_then(Value::as_u64) {
            item.permissions.next_owner = PermissionMask::from_wire(raw as u32) & base;
        }
        if let Some(raw) = perms.get("group_mask").and_then(Value::as_u64) {
            item.permissions.group = PermissionMask::from_wire(raw as u32) & base;
        }
    }
}
