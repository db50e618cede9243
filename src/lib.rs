//! sidefav: manage Finder sidebar favorites
//!
//! Layers, innermost first: `domain` (favorites model and list file format),
//! `application` (the favorites store), `infrastructure` (OS list, filesystem,
//! dependency wiring) and `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
