//! Per-folder advisory locks.
//!
//! Multi-step tree mutations are not atomic against the store, so every
//! mutating operation holds the advisory lock of the folder(s) it
//! touches for its full duration. Locks are keyed by folder ID and
//! acquired in sorted order when two folders are involved, so two
//! concurrent cross-folder operations cannot deadlock.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Registry of advisory per-folder mutexes.
#[derive(Debug, Default)]
pub struct FolderLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl FolderLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Lock a single folder for the duration of one mutating operation.
    pub async fn lock(&self, id: Uuid) -> OwnedMutexGuard<()> {
        self.entry(id).lock_owned().await
    }

    /// Lock a pair of folders (source and destination) in ID order.
    pub async fn lock_pair(&self, a: Uuid, b: Uuid) -> Vec<OwnedMutexGuard<()>> {
        if a == b {
            return vec![self.lock(a).await];
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        vec![self.lock(first).await, self.lock(second).await]
    }
}
