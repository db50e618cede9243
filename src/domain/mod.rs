//! Domain layer: favorites model and the list file format
//!
//! This layer is independent of external concerns (no I/O, no OS list, no config loading).

pub mod entities;
pub mod error;
pub mod list_file;

pub use entities::*;
pub use error::DomainError;
pub use list_file::{format_entries, parse_line, SEPARATOR};
