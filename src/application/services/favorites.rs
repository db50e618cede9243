//! Favorites store
//!
//! Façade over the OS favorites list. Holds a snapshot that is re-read
//! after every write, so the next operation in the same process sees the
//! list as this store left it. Changes by Finder or other processes only
//! show up on the next refresh.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt, ListResultExt};
use crate::config::Settings;
use crate::domain::{format_entries, parse_line, validate_label, FavoriteEntry, FavoriteTarget};
use crate::infrastructure::traits::{FileSystem, InsertPosition, ItemId, SharedFileList};

/// A resolved favorite together with the OS item it came from.
#[derive(Debug, Clone)]
struct SnapshotRow {
    id: ItemId,
    entry: FavoriteEntry,
}

/// Result of `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub entry: FavoriteEntry,
    /// Label the entry was placed behind; `None` means head of the list
    pub after: Option<String>,
}

/// Result of `replace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub entry: FavoriteEntry,
    /// Target before the replace; `None` if the label did not exist
    pub previous_target: Option<String>,
}

/// An import line that did not make it into the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the import file
    pub line_no: usize,
    pub line: String,
    pub reason: String,
}

/// Outcome of `import_from`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries removed by the initial clear
    pub removed: usize,
    /// Entries added, in file order
    pub imported: Vec<FavoriteEntry>,
    /// Lines that were malformed or rejected
    pub skipped: Vec<SkippedLine>,
    /// The final list was not flushed to the preferences layer
    pub pending_sync: bool,
}

/// Service managing the sidebar favorites list.
pub struct FavoritesStore {
    list: Arc<dyn SharedFileList>,
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    snapshot: Vec<SnapshotRow>,
    /// Set when the last flush to the preferences layer failed
    pending_sync: bool,
}

impl FavoritesStore {
    /// Create a store and take the initial snapshot.
    pub fn open(
        list: Arc<dyn SharedFileList>,
        fs: Arc<dyn FileSystem>,
        settings: Arc<Settings>,
    ) -> ApplicationResult<Self> {
        let mut store = Self {
            list,
            fs,
            settings,
            snapshot: Vec::new(),
            pending_sync: false,
        };
        store.refresh()?;
        Ok(store)
    }

    /// Re-read the OS list into the snapshot.
    ///
    /// Items whose name or URL does not resolve are not visible to this
    /// store. For repeated labels the first item wins; later ones are
    /// skipped as well.
    pub fn refresh(&mut self) -> ApplicationResult<()> {
        let items = self.list.snapshot().with_list_context("snapshot")?;
        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(items.len());

        for item in items {
            match (item.display_name, item.resolved_url) {
                (Some(label), Some(target)) => {
                    if seen.insert(label.clone()) {
                        rows.push(SnapshotRow {
                            id: item.id,
                            entry: FavoriteEntry::new(label, target),
                        });
                    } else {
                        debug!("refresh: duplicate '{}' (item {}) skipped", label, item.id.0);
                    }
                }
                (name, url) => {
                    debug!(
                        "refresh: unresolved item {} skipped (name={:?}, url={:?})",
                        item.id.0, name, url
                    );
                }
            }
        }

        debug!("refresh: {} favorites", rows.len());
        self.snapshot = rows;
        Ok(())
    }

    /// Current favorites in sidebar order.
    pub fn list(&self) -> Vec<FavoriteEntry> {
        self.snapshot.iter().map(|row| row.entry.clone()).collect()
    }

    /// Look up a favorite by label.
    pub fn get(&self, label: &str) -> Option<&FavoriteEntry> {
        self.find(label).map(|row| &row.entry)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// True when the last write is in the OS list but was not flushed to
    /// the preferences layer. Other readers may not see it yet.
    pub fn pending_sync(&self) -> bool {
        self.pending_sync
    }

    fn find(&self, label: &str) -> Option<&SnapshotRow> {
        self.snapshot.iter().find(|row| row.entry.label == label)
    }

    /// Flush the write to the preferences layer, then re-read the list.
    ///
    /// The OS write has already happened at this point, so a failed flush
    /// is only a warning and is remembered in `pending_sync`.
    fn commit(&mut self) -> ApplicationResult<()> {
        match self.list.synchronize() {
            Ok(()) => self.pending_sync = false,
            Err(e) => {
                warn!("synchronize of '{}' failed: {}", self.settings.preferences_domain, e);
                self.pending_sync = true;
            }
        }
        self.refresh()
    }

    /// Write all favorites as `LABEL -> TARGET` lines. Returns the entry count.
    pub fn export_to(&self, path: &Path) -> ApplicationResult<usize> {
        debug!("export_to: path={}", path.display());
        let entries = self.list();
        self.fs
            .write(path, &format_entries(&entries))
            .with_path_context("export favorites", path)?;
        Ok(entries.len())
    }

    /// Add a favorite at the head of the list, or directly behind `after`.
    ///
    /// An `after` label that is not in the snapshot falls back to the head.
    /// The target scheme is checked before anything is written.
    pub fn add(
        &mut self,
        label: &str,
        target: &str,
        after: Option<&str>,
    ) -> ApplicationResult<AddOutcome> {
        debug!("add: label={}, target={}, after={:?}", label, target, after);
        validate_label(label)?;
        let target = FavoriteTarget::parse(target, &self.settings.schemes)?;

        let (position, placed_after) = match after {
            None => (InsertPosition::First, None),
            Some(anchor) => match self.find(anchor) {
                Some(row) => (InsertPosition::After(row.id), Some(anchor.to_string())),
                None => {
                    warn!("add: '{}' not found, inserting '{}' at start", anchor, label);
                    (InsertPosition::First, None)
                }
            },
        };

        self.list
            .insert(position, label, target.as_str())
            .with_list_context("insert")?;
        self.commit()?;

        Ok(AddOutcome {
            entry: FavoriteEntry::new(label, target.as_str()),
            after: placed_after,
        })
    }

    /// Remove the favorite named `label`.
    pub fn remove(&mut self, label: &str) -> ApplicationResult<FavoriteEntry> {
        debug!("remove: label={}", label);
        let row = self
            .find(label)
            .cloned()
            .ok_or_else(|| ApplicationError::LabelNotFound(label.to_string()))?;

        self.list.remove(row.id).with_list_context("remove")?;
        self.commit()?;
        Ok(row.entry)
    }

    /// Point `label` at `new_target`.
    ///
    /// Implemented as remove + add, so the entry moves to the head of the
    /// list. A missing label is simply added.
    pub fn replace(&mut self, label: &str, new_target: &str) -> ApplicationResult<ReplaceOutcome> {
        debug!("replace: label={}, new_target={}", label, new_target);
        validate_label(label)?;
        FavoriteTarget::parse(new_target, &self.settings.schemes)?;

        let previous_target = if self.find(label).is_some() {
            Some(self.remove(label)?.target)
        } else {
            None
        };
        let added = self.add(label, new_target, None)?;

        Ok(ReplaceOutcome {
            entry: added.entry,
            previous_target,
        })
    }

    /// Remove every favorite in the snapshot. Returns how many went away.
    ///
    /// Items the OS refuses to remove are logged and left in place.
    #[instrument(skip(self))]
    pub fn remove_all(&mut self) -> ApplicationResult<usize> {
        let rows = self.snapshot.clone();
        let mut removed = 0;

        for row in &rows {
            match self.list.remove(row.id) {
                Ok(()) => removed += 1,
                Err(e) => warn!("remove_all: '{}' not removed: {}", row.entry.label, e),
            }
        }

        self.commit()?;
        debug!("remove_all: removed {} of {}", removed, rows.len());
        Ok(removed)
    }

    /// Replace the whole list with the contents of an export file.
    ///
    /// The file is read before the list is cleared. Lines are added in
    /// file order, each behind the previous one. Bad lines are recorded
    /// in the report and skipped.
    #[instrument(skip(self))]
    pub fn import_from(&mut self, path: &Path) -> ApplicationResult<ImportReport> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::FileNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read import file", path)?;

        let mut report = ImportReport {
            removed: self.remove_all()?,
            ..Default::default()
        };

        let mut anchor: Option<String> = None;
        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            let skip = |reason: String| SkippedLine {
                line_no,
                line: line.to_string(),
                reason,
            };

            let entry = match parse_line(line, line_no) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(e) => {
                    warn!("import: {}", e);
                    report.skipped.push(skip(e.to_string()));
                    continue;
                }
            };

            match self.add(&entry.label, &entry.target, anchor.as_deref()) {
                Ok(outcome) => {
                    anchor = Some(outcome.entry.label.clone());
                    report.imported.push(outcome.entry);
                }
                Err(e) => {
                    warn!("import: line {} '{}' skipped: {}", line_no, line, e);
                    report.skipped.push(skip(e.to_string()));
                }
            }
        }

        report.pending_sync = self.pending_sync;
        debug!(
            "import: {} imported, {} skipped, pending_sync={}",
            report.imported.len(),
            report.skipped.len(),
            report.pending_sync
        );
        Ok(report)
    }
}
