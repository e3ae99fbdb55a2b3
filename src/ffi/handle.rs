//! Generic handle registry, one instance per object family.
//!
//! Handles are monotonically increasing u64s, never reused within a
//! process lifetime even after removal: a stale handle from a freed
//! object can never silently address a newer one. 0 is the invalid
//! sentinel and is never issued.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, RwLock};

use crate::list::List;
use crate::style::Style;
use crate::table::Table;
use crate::tree::Tree;

/// Thread-safe map from handle to an exclusively-owned instance.
///
/// Each family carries its own lock; a style operation never blocks a
/// table operation.
pub struct HandleRegistry<T> {
    family: &'static str,
    next_id: AtomicU64,
    entries: RwLock<HashMap<u64, T>>,
}

impl<T: Clone> HandleRegistry<T> {
    pub fn new(family: &'static str) -> Self {
        super::logging::ensure_logger();
        Self {
            family,
            next_id: AtomicU64::new(0),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert an instance under a fresh handle. The counter increments
    /// before issue, so the first handle is 1 and 0 is never returned.
    pub fn register(&self, instance: T) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, instance);
        log::debug!("registered {} handle {id}", self.family);
        id
    }

    /// Clone of the instance behind `handle`, or `None` for a handle
    /// that was never issued or already removed.
    pub fn get(&self, handle: u64) -> Option<T> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let found = entries.get(&handle).cloned();
        if found.is_none() {
            log::error!("{} handle {handle} not found", self.family);
        }
        found
    }

    /// Remove `handle`. Idempotent: removing an unknown handle logs a
    /// warning and leaves the registry untouched.
    pub fn remove(&self, handle: u64) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.remove(&handle).is_some() {
            log::debug!("removed {} handle {handle}", self.family);
        } else {
            log::warn!("attempted to remove unknown {} handle {handle}", self.family);
        }
    }

    /// `(live entries, next id)` for the diagnostics surface.
    pub fn stats(&self) -> (usize, u64) {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        (entries.len(), self.next_id.load(Ordering::Relaxed))
    }
}

pub static STYLES: LazyLock<HandleRegistry<Style>> =
    LazyLock::new(|| HandleRegistry::new("style"));
pub static LISTS: LazyLock<HandleRegistry<List>> = LazyLock::new(|| HandleRegistry::new("list"));
pub static TABLES: LazyLock<HandleRegistry<Table>> =
    LazyLock::new(|| HandleRegistry::new("table"));
pub static TREES: LazyLock<HandleRegistry<Tree>> = LazyLock::new(|| HandleRegistry::new("tree"));
