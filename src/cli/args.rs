//! CLI argument definitions using clap
//!
//! Flags map 1:1 to store operations. When several are given, the first
//! one in `Cli::action` order wins; an incomplete combination (e.g.
//! `--export` without `--file`) selects nothing and prints help.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::util::path::expand_path;

/// Manage Finder sidebar favorites
#[derive(Parser, Debug)]
#[command(name = "sidefav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: $XDG_CONFIG_HOME/sidefav/sidefav.toml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// File path for import/export ('-' exports to stdout)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<String>,

    /// Export favorites to --file
    #[arg(short, long)]
    pub export: bool,

    /// Replace all favorites with the contents of --file
    #[arg(short = 'i', long = "import-file")]
    pub import_file: bool,

    /// Add a favorite at the start
    #[arg(short, long, num_args = 2, value_names = ["LABEL", "PATH"])]
    pub add: Option<Vec<String>>,

    /// Add a favorite after another one
    #[arg(short = 'A', long, num_args = 3, value_names = ["LABEL", "PATH", "AFTER"])]
    pub add_after: Option<Vec<String>>,

    /// Remove a favorite
    #[arg(short = 'd', long, visible_alias = "delete", value_name = "LABEL")]
    pub remove: Option<String>,

    /// Point a favorite at a new path (moves it to the start)
    #[arg(short, long, num_args = 2, value_names = ["LABEL", "NEW_PATH"])]
    pub replace: Option<Vec<String>>,

    /// List favorites
    #[arg(short, long)]
    pub list: bool,

    /// Remove all favorites
    #[arg(long)]
    pub remove_all: bool,

    /// Show effective settings
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Where an export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// The single operation selected by the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Completions(clap_complete::Shell),
    ShowConfig,
    Export(ExportTarget),
    Import(PathBuf),
    Add {
        label: String,
        target: String,
        after: Option<String>,
    },
    Remove(String),
    Replace {
        label: String,
        target: String,
    },
    List,
    RemoveAll,
}

impl Cli {
    /// Resolve the flags into one action; `None` means "print help".
    pub fn action(&self) -> Option<Action> {
        if let Some(shell) = self.completions {
            return Some(Action::Completions(shell));
        }
        if self.show_config {
            return Some(Action::ShowConfig);
        }
        if let (true, Some(file)) = (self.export, self.file.as_deref()) {
            let target = match file {
                "-" => ExportTarget::Stdout,
                path => ExportTarget::File(expand_path(path)),
            };
            return Some(Action::Export(target));
        }
        if let (true, Some(file)) = (self.import_file, self.file.as_deref()) {
            return Some(Action::Import(expand_path(file)));
        }
        if let Some([label, target]) = self.add.as_deref() {
            return Some(Action::Add {
                label: label.clone(),
                target: target.clone(),
                after: None,
            });
        }
        if let Some([label, target, after]) = self.add_after.as_deref() {
            return Some(Action::Add {
                label: label.clone(),
                target: target.clone(),
                after: Some(after.clone()),
            });
        }
        if let Some(label) = &self.remove {
            return Some(Action::Remove(label.clone()));
        }
        if let Some([label, target]) = self.replace.as_deref() {
            return Some(Action::Replace {
                label: label.clone(),
                target: target.clone(),
            });
        }
        if self.list {
            return Some(Action::List);
        }
        if self.remove_all {
            return Some(Action::RemoveAll);
        }
        None
    }
}
