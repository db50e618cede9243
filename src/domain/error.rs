//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the favorites model.
/// These are independent of the OS list and the filesystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported target '{target}': must start with {expected}")]
    UnsupportedScheme { target: String, expected: String },

    #[error("malformed line {line_no}: '{line}' (expected 'LABEL -> TARGET')")]
    MalformedLine { line_no: usize, line: String },

    #[error("invalid label: '{0}'")]
    InvalidLabel(String),
}
