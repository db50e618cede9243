//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Failures reported by a `SharedFileList` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("favorites list is not available")]
    Unavailable,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("list item {0} not found")]
    ItemNotFound(u32),

    #[error("insert of '{0}' was rejected")]
    InsertRejected(String),

    #[error("OSStatus {0}")]
    Status(i32),

    #[error("preferences synchronize failed for {0}")]
    SyncFailed(String),
}

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sidebar list: {0}")]
    SharedList(#[from] ListError),

    #[error("Finder sidebar favorites are not available on {0}")]
    UnsupportedPlatform(String),
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
