//! MOVE of categories and items.
//!
//! The destination token comes from the `Destination` header, already
//! stripped to a category token by the API layer. Destination failures
//! are NotFound; the source vanishing is Gone.

use serde_json::{Value, json};
use uuid::Uuid;

use ais_core::{AppError, AppResult, ErrorKind};

use crate::context::RequestContext;
use crate::wire::{folder_value, item_value};

use super::InventoryService;

fn map_move_error(err: AppError) -> AppError {
    match err.kind {
        ErrorKind::NotFound => AppError::gone("Source gone"),
        _ => err,
    }
}

impl InventoryService {
    /// MOVE of a category under a new parent.
    pub async fn move_category(
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
        let folder = resolver
            .resolve(token)
            .await
            .map_err(|_| AppError::gone("Source category gone"))?;
        if folder.is_system() {
            return Err(AppError::forbidden("Cannot move a system folder"));
        }
        let _guards = self.locks.lock_pair(folder.parent_id, dest.id).await;

        self.store
            .move_folder(ctx.owner, folder.id, dest.id)
            .await
            .map_err(map_move_error)?;

        let versions = self
            .moved_versions(ctx.owner, folder.parent_id, dest.id)
            .await?;
        let mut moved = folder;
        moved.parent_id = dest.id;
        let mut value = folder_value(&moved, ctx);
        value["_updated_categories"] = json!([moved.id.to_string()]);
        value["_updated_category_versions"] = versions;
        Ok(value)
    }

    /// MOVE of an item into another category.
    pub async fn move_item(
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
        let _guards = self.locks.lock_pair(item.parent_id, dest.id).await;

        self.store
            .move_item(ctx.owner, id, dest.id)
            .await
            .map_err(map_move_error)?;

        let versions = self
            .moved_versions(ctx.owner, item.parent_id, dest.id)
            .await?;
        let mut moved = item;
        moved.parent_id = dest.id;
        let mut value = item_value(&moved, ctx);
        value["_updated_items"] = json!([moved.id.to_string()]);
        value["_updated_category_versions"] = versions;
        Ok(value)
    }

    /// Versions of both folders whose child set a move changed.
    async fn moved_versions(
        &self,
        owner: Uuid,
        old_parent: Uuid,
        new_parent: Uuid,
    ) -> AppResult<Value> {
        let mut versions = serde_json::Map::new();
        if let Some(folder) = self.current_folder(owner, old_parent).await? {
            versions.insert(folder.id.to_string(), json!(folder.version));
        }
        if let Some(folder) = self.current_folder(owner, new_parent).await? {
            versions.insert(folder.id.to_string(), json!(folder.version));
        }
        Ok(Value::Object(versions))
    }
}
