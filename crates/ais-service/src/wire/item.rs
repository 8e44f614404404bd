//! Item wire mapping.
//!
//! Link items (`Link`/`LinkFolder`) serialize a reduced shape: their
//! target goes out as `linked_id` and the flags, sale info, and
//! permission blocks are omitted.

use chrono::Utc;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, InventoryFlags, InventoryType, Item, PermissionMask};

use crate::context::RequestContext;

use super::href;

/// Render an item as a wire value with its `_links` block.
pub fn item_value(item: &Item, ctx: &RequestContext) -> Value {
    let mut map = Map::new();
    map.insert("inv_type".into(), json!(item.inventory_type.code()));
    map.insert("name".into(), json!(item.name));
    if item.is_link() {
        map.insert("linked_id".into(), json!(item.asset_id.to_string()));
    } else {
        map.insert("asset_id".into(), json!(item.asset_id.to_string()));
    }
    map.insert(
        "created_at".into(),
        json!(item.created_at.timestamp().to_string()),
    );
    map.insert("parent_id".into(), json!(item.parent_id.to_string()));
    if !item.is_link() {
        map.insert("flags".into(), json!(item.flags.bits()));
    }
    map.insert("agent_id".into(), json!(item.owner_id.to_string()));
    map.insert("item_id".into(), json!(item.id.to_string()));
    map.insert("type".into(), json!(item.asset_type.code()));
    map.insert("desc".into(), json!(item.description));
    if !item.is_link() {
        map.insert(
            "sale_info".into(),
            json!({
                "sale_price": item.sale_info.price,
                "sale_type": item.sale_info.sale_type.code(),
            }),
        );
        map.insert(
            "permissions".into(),
            json!({
                "base_mask": item.permissions.base.bits(),
                "group_mask": item.permissions.group.bits(),
                "last_owner_id": item.last_owner_id.to_string(),
                "owner_id": item.owner_id.to_string(),
                "owner_mask": item.permissions.current.bits(),
                "creator_id": item.creator_id.to_string(),
                "next_owner_mask": item.permissions.next_owner.bits(),
                "group_id": item.group_id.to_string(),
                "everyone_mask": item.permissions.everyone.bits(),
            }),
        );
    }
    let mut links = Map::new();
    links.insert("self".into(), href(ctx.item_href(item.id)));
    links.insert(
        "parent".into(),
        href(ctx.category_href(&item.parent_id.to_string())),
    );
    match item.asset_type {
        AssetType::Link => {
            links.insert("item".into(), href(ctx.item_href(item.asset_id)));
        }
        AssetType::LinkFolder => {
            links.insert(
                "category".into(),
                href(ctx.category_href(&item.asset_id.to_string())),
            );
        }
        _ => {}
    }
    map.insert("_links".into(), Value::Object(links));
    Value::Object(map)
}

fn uuid_field(value: &Value, key: &str) -> Option<Uuid> {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}

fn mask_field(value: &Value, key: &str) -> Option<PermissionMask> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(|raw| PermissionMask::from_wire(raw as u32))
}

/// Build a new item from a wire value.
///
/// `name`, `inv_type`, and `type` are mandatory; everything else falls
/// back to open defaults. The id is left nil for the store to assign,
/// ownership and creation time are stamped here.
pub fn item_from_wire(value: &Value, owner: Uuid, parent_id: Uuid) -> AppResult<Item> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::bad_request("item requires a name"))?;
    let inv_type = value
        .get("inv_type")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::bad_request("item requires inv_type"))?;
    let asset_type = value
        .get("type")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::bad_request("item requires type"))?;

    let mut item = Item::new(owner, parent_id);
    item.name = name.to_string();
    item.inventory_type = InventoryType::from_code(inv_type as i32);
    item.asset_type = AssetType::from_code(asset_type as i32);
    item.created_at = Utc::now();

    if let Some(id) = uuid_field(value, "asset_id").or_else(|| uuid_field(value, "linked_id")) {
        item.asset_id = id;
    }
    if let Some(desc) = value.get("desc").and_then(Value::as_str) {
        item.description = desc.to_string();
    }
    if let Some(raw) = value.get("flags").and_then(Value::as_u64) {
        item.flags = InventoryFlags::from_wire(raw as u32);
    }
    if let Some(sale) = value.get("sale_info") {
        if let Some(price) = sale.get("sale_price").and_then(Value::as_i64) {
            item.sale_info.price = price as i32;
        }
        if let Some(kind) = sale.get("sale_type").and_then(Value::as_i64) {
            item.sale_info.sale_type = ais_entity::SaleType::from_code(kind as i32);
        }
    }
    if let Some(perms) = value.get("permissions") {
        if let Some(mask) = mask_field(perms, "base_mask") {
            item.permissions.base = mask;
        }
        if let Some(mask) = mask_field(perms, "owner_mask") {
            item.permissions.current = mask;
        }
        if let Some(mask) = mask_field(perms, "next_owner_mask") {
            item.permissions.next_owner = mask;
        }
        if let Some(mask) = mask_field(perms, "group_mask") {
            item.permissions.group = mask;
        }
        if let Some(mask) = mask_field(perms, "everyone_mask") {
            item.permissions.everyone = mask;
        }
        if let Some(id) = uuid_field(perms, "last_owner_id") {
            item.last_owner_id = id;
        }
        if let Some(id) = uuid_field(perms, "creator_id") {
            item.creator_id = id;
        }
        if let Some(id) = uuid_field(perms, "group_id") {
            item.group_id = id;
        }
        item.permissions.clamp_to_base();
    }
    Ok(item)
}
