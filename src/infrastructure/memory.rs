//! In-memory `SharedFileList`
//!
//! Behaves like the Finder list for ordering, ids and URL validation, and
//! counts synchronize calls so tests can check read-after-write handling.

use std::sync::Mutex;

use crate::infrastructure::traits::{InsertPosition, ItemId, ListItem, SharedFileList};
use crate::infrastructure::ListError;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<ListItem>,
    next_id: u32,
    sync_count: usize,
}

impl Inner {
    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    fn position_of(&self, id: ItemId) -> Result<usize, ListError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ListError::ItemNotFound(id.0))
    }
}

/// Ordered list held in process memory.
#[derive(Debug, Default)]
pub struct MemoryList {
    inner: Mutex<Inner>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list with resolved entries in the given order.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let list = Self::new();
        {
            let mut inner = list.lock();
            for (label, url) in entries {
                let id = inner.allocate_id();
                inner.items.push(ListItem {
                    id,
                    display_name: Some(label.to_string()),
                    resolved_url: Some(url.to_string()),
                });
            }
        }
        list
    }

    /// Append an item whose name or URL does not resolve.
    pub fn push_raw(&self, display_name: Option<&str>, resolved_url: Option<&str>) -> ItemId {
        let mut inner = self.lock();
        let id = inner.allocate_id();
        inner.items.push(ListItem {
            id,
            display_name: display_name.map(str::to_string),
            resolved_url: resolved_url.map(str::to_string),
        });
        id
    }

    /// Raw items including unresolved ones.
    pub fn items(&self) -> Vec<ListItem> {
        self.lock().items.clone()
    }

    /// Number of synchronize calls so far.
    pub fn sync_count(&self) -> usize {
        self.lock().sync_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SharedFileList for MemoryList {
    fn snapshot(&self) -> Result<Vec<ListItem>, ListError> {
        Ok(self.items())
    }

    fn insert(
        &self,
        position: InsertPosition,
        label: &str,
        url: &str,
    ) -> Result<ItemId, ListError> {
        // CFURLCreateWithString rejects these as well
        if url.is_empty() || url.chars().any(char::is_whitespace) {
            return Err(ListError::InvalidUrl(url.to_string()));
        }

        let mut inner = self.lock();
        let index = match position {
            InsertPosition::First => 0,
            InsertPosition::After(anchor) => inner.position_of(anchor)? + 1,
        };
        let id = inner.allocate_id();
        inner.items.insert(
            index,
            ListItem {
                id,
                display_name: Some(label.to_string()),
                resolved_url: Some(url.to_string()),
            },
        );
        Ok(id)
    }

    fn remove(&self, id: ItemId) -> Result<(), ListError> {
        let mut inner = self.lock();
        let index = inner.position_of(id)?;
        inner.items.remove(index);
        Ok(())
    }

    fn synchronize(&self) -> Result<(), ListError> {
        self.lock().sync_count += 1;
        Ok(())
    }
}
