//! Error conversion helpers for file and list operations
//!
//! Provides extension traits for cleaner error handling with context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::ListError;

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.write(&path, &content)
    ///     .with_path_context("export favorites", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

/// Extension trait for OS list results.
pub trait ListResultExt<T> {
    /// Name the list operation that failed.
    fn with_list_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> ListResultExt<T> for Result<T, ListError> {
    fn with_list_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::SharedList {
            context: action.to_string(),
            message: e.to_string(),
        })
    }
}
