//! I/O boundary traits for testability
//!
//! These traits abstract the OS favorites list and the filesystem,
//! allowing the store to be tested with in-memory implementations.

use std::io;
use std::path::Path;

use crate::infrastructure::ListError;

/// Identity the OS assigns to a list item. Stable for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u32);

/// One raw item of the OS list, as enumerated.
///
/// Name and URL are resolved independently by the OS and either may be
/// missing (e.g. an unmounted volume or an item still being created).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: ItemId,
    pub display_name: Option<String>,
    pub resolved_url: Option<String>,
}

/// Where a new item goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Head of the list
    First,
    /// Directly after an existing item
    After(ItemId),
}

/// Ordered, system-wide shared list of named URL references.
pub trait SharedFileList: Send + Sync {
    /// Enumerate all items in list order.
    fn snapshot(&self) -> Result<Vec<ListItem>, ListError>;

    /// Insert a named URL at `position`, returning the new item's id.
    fn insert(&self, position: InsertPosition, label: &str, url: &str)
        -> Result<ItemId, ListError>;

    /// Remove an item.
    fn remove(&self, id: ItemId) -> Result<(), ListError>;

    /// Flush pending changes so other readers (Finder) see them now.
    fn synchronize(&self) -> Result<(), ListError>;
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file (create or truncate).
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
