//! Cascading and single-entity deletes.
//!
//! Descendant removal walks an explicit work queue. Store deletes are
//! idempotent, so an entity vanishing between content fetch and delete
//! is silently skipped rather than failing the cascade.

use std::collections::VecDeque;

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use ais_core::{AppError, AppResult};

use crate::context::RequestContext;
use crate::results::MutationSummary;

use super::InventoryService;

impl InventoryService {
    /// DELETE of a category: the folder and its whole subtree.
    ///
    /// System folders (root, trash, ...) are never deletable. The
    /// response reports the parent folder's new version.
    /// `_categories_removed` lists descendants only; the target's own
    /// removal is implied by the request URL.
    pub async fn delete_category(&self, ctx: &RequestContext, token: &str) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        if folder.is_system() {
            return Err(AppError::forbidden("Cannot delete a system folder"));
        }
        let _guard = self.locks.lock(folder.id).await;

        let mut summary = MutationSummary::new();
        self.purge_descendants(ctx.owner, folder.id, &mut summary)
            .await?;
        self.store.delete_folder(ctx.owner, folder.id).await?;
        if let Some(parent) = self.current_folder(ctx.owner, folder.parent_id).await? {
            summary.add_updated_category(&parent);
        }
        debug!(
            category = %folder.id,
            items_removed = summary.items_removed(),
            "category deleted"
        );
        Ok(summary.into_value())
    }

    /// DELETE of a category's children: the subtree goes, the folder
    /// stays. Reports the folder's own new version.
    pub async fn purge_category(&self, ctx: &RequestContext, token: &str) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let _guard = self.locks.lock(folder.id).await;

        let mut summary = MutationSummary::new();
        self.purge_descendants(ctx.owner, folder.id, &mut summary)
            .await?;
        if let Some(current) = self.current_folder(ctx.owner, folder.id).await? {
            summary.add_updated_category(&current);
        }
        Ok(summary.into_value())
    }

    /// DELETE of a category's direct items (links included).
    pub async fn delete_category_items(
        &self,
        ctx: &RequestContext,
        token: &str,
    ) -> AppResult<Value> {
        self.delete_direct_items(ctx, token, false).await
    }

    /// DELETE of a category's direct links only.
    pub async fn delete_category_links(
        &self,
        ctx: &RequestContext,
        token: &str,
    ) -> AppResult<Value> {
        self.delete_direct_items(ctx, token, true).await
    }

    async fn delete_direct_items(
        &self,
        ctx: &RequestContext,
        token: &str,
        links_only: bool,
    ) -> AppResult<Value> {
        let mut resolver = self.resolver(ctx);
        let folder = resolver.resolve(token).await?;
        let _guard = self.locks.lock(folder.id).await;

        let mut summary = MutationSummary::new();
        for item in self.store.items_of(ctx.owner, folder.id).await? {
            if links_only && !item.is_link() {
                continue;
            }
            if self.store.delete_item(ctx.owner, item.id).await? {
                summary.add_removed_item(&item);
            }
        }
        if let Some(current) = self.current_folder(ctx.owner, folder.id).await? {
            summary.add_updated_category(&current);
        }
        Ok(summary.into_value())
    }

    /// DELETE of a single item. The item vanishing beforehand is Gone;
    /// losing the delete race afterwards is not an error.
    pub async fn delete_item(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Value> {
        let item = self
            .store
            .item(ctx.owner, id)
            .await?
            .ok_or_else(|| AppError::gone("Gone"))?;
        let _guard = self.locks.lock(item.parent_id).await;

        let mut summary = MutationSummary::new();
        if self.store.delete_item(ctx.owner, id).await? {
            summary.add_removed_item(&item);
        }
        if let Some(parent) = self.current_folder(ctx.owner, item.parent_id).await? {
            summary.add_updated_category(&parent);
        }
        Ok(summary.into_value())
    }

    /// Remove everything below `root` (items and folders, not `root`
    /// itself), recording each removal.
    pub(super) async fn purge_descendants(
        &self,
        owner: Uuid,
        root: Uuid,
        summary: &mut MutationSummary,
    ) -> AppResult<()> {
        let mut queue: VecDeque<Uuid> = VecDeque::new();
        queue.push_back(root);
        let mut at_root = true;
        while let Some(id) = queue.pop_front() {
            if let Some(content) = self.store.content(owner, id).await? {
                for item in content.items {
                    if self.store.delete_item(owner, item.id).await? {
                        summary.add_removed_item(&item);
                    }
                }
                for child in content.folders {
                    queue.push_back(child.id);
                }
            }
            if !at_root && self.store.delete_folder(owner, id).await? {
                summary.add_removed_category(id);
            }
            at_root = false;
        }
        Ok(())
    }
}
