//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (SharedFileList, FileSystem)
//! but are themselves concrete structs, not traits.

mod favorites;

pub use favorites::{AddOutcome, FavoritesStore, ImportReport, ReplaceOutcome, SkippedLine};
