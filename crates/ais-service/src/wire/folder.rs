//! Category (folder) wire mapping.

use serde_json::{Value, json};
use uuid::Uuid;

use ais_core::{AppError, AppResult};
use ais_entity::{AssetType, Folder};

use crate::context::RequestContext;

use super::href;

/// Render a folder as a category wire value with its `_links` block.
pub fn folder_value(folder: &Folder, ctx: &RequestContext) -> Value {
    let id = folder.id.to_string();
    json!({
        "name": folder.name,
        "type_default": folder.default_type.code(),
        "parent_id": folder.parent_id.to_string(),
        "version": folder.version,
        "agent_id": folder.owner_id.to_string(),
        "category_id": id,
        "_links": {
            "self": href(ctx.category_href(&id)),
            "parent": href(ctx.category_href(&folder.parent_id.to_string())),
            "links": href(format!("{}/links", ctx.category_href(&id))),
            "items": href(format!("{}/items", ctx.category_href(&id))),
            "children": href(format!("{}/children", ctx.category_href(&id))),
        },
    })
}

/// Build a new folder from a wire category value.
///
/// `name` is mandatory; `type_default` is optional and defaults to an
/// ordinary (non-system) folder. The id is left nil for the store to
/// assign.
pub fn folder_from_wire(value: &Value, owner: Uuid, parent_id: Uuid) -> AppResult<Folder> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::bad_request("category requires a name"))?;
    let default_type = value
        .get("type_default")
        .and_then(Value::as_i64)
        .map(|code| AssetType::from_code(code as i32))
        .unwrap_or(AssetType::Unknown);
    Ok(Folder {
        id: Uuid::nil(),
        name: name.to_string(),
        parent_id,
        default_type,
        version: 1,
        owner_id: owner,
    })
}
