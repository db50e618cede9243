//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
#[cfg(target_os = "macos")]
pub mod launch_services;
pub mod memory;
pub mod traits;

pub use error::{InfraError, InfraResult, ListError};
