//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Action, Cli, ExportTarget};
pub use error::{CliError, CliResult};
