//! Command dispatch: one action per invocation

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::FavoritesStore;
use crate::cli::args::{Action, Cli, ExportTarget};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::format_entries;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Entry point from `main`: resolve the action, wire services, execute.
pub fn run(cli: &Cli) -> CliResult<()> {
    let action = match cli.action() {
        Some(action) => action,
        None => {
            return Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e).into());
        }
    };
    debug!("run: action={:?}", action);

    match action {
        Action::Completions(shell) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Action::ShowConfig => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        action => {
            let settings = Settings::load(cli.config.as_deref())?;
            let container = ServiceContainer::new(settings)?;
            execute_command(&action, &container)
        }
    }
}

/// Run a favorites action against the container's list.
pub fn execute_command(action: &Action, container: &ServiceContainer) -> CliResult<()> {
    match action {
        Action::Export(target) => export(container, target),
        Action::Import(path) => import(container, path),
        Action::Add {
            label,
            target,
            after,
        } => add(container, label, target, after.as_deref()),
        Action::Remove(label) => remove(container, label),
        Action::Replace { label, target } => replace(container, label, target),
        Action::List => list(container),
        Action::RemoveAll => remove_all(container),
        Action::Completions(_) | Action::ShowConfig => Err(CliError::InvalidArgs(format!(
            "{:?} does not operate on the favorites list",
            action
        ))),
    }
}

#[instrument(skip(container))]
fn export(container: &ServiceContainer, target: &ExportTarget) -> CliResult<()> {
    let store = container.favorites_store()?;
    match target {
        ExportTarget::Stdout => {
            print!("{}", format_entries(&store.list()));
        }
        ExportTarget::File(path) => {
            let count = store.export_to(path)?;
            output::success(&format!(
                "Favorites exported to {} ({} entries)",
                path.display(),
                count
            ));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn import(container: &ServiceContainer, path: &Path) -> CliResult<()> {
    if path == Path::new("-") {
        return Err(CliError::InvalidArgs(
            "import needs a file, not stdout".into(),
        ));
    }
    let mut store = container.favorites_store()?;
    let report = store.import_from(path)?;
    warn_if_unsynced(&store);

    for skipped in &report.skipped {
        output::warning(&format!(
            "line {} skipped: {} ({})",
            skipped.line_no, skipped.line, skipped.reason
        ));
    }
    output::success(&format!(
        "Favorites imported from {}: {} added, {} skipped",
        path.display(),
        report.imported.len(),
        report.skipped.len()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn add(container: &ServiceContainer, label: &str, target: &str, after: Option<&str>) -> CliResult<()> {
    let mut store = container.favorites_store()?;
    let outcome = store.add(label, target, after)?;
    warn_if_unsynced(&store);
    if let (Some(requested), None) = (after, &outcome.after) {
        output::warning(&format!("favorite '{}' not found, added at start", requested));
    }
    output::success(&format!(
        "Added: {} after {}",
        outcome.entry,
        outcome.after.as_deref().unwrap_or("start")
    ));
    Ok(())
}

#[instrument(skip(container))]
fn remove(container: &ServiceContainer, label: &str) -> CliResult<()> {
    let mut store = container.favorites_store()?;
    let removed = store.remove(label)?;
    warn_if_unsynced(&store);
    output::success(&format!("Removed: {}", removed.label));
    Ok(())
}

#[instrument(skip(container))]
fn replace(container: &ServiceContainer, label: &str, target: &str) -> CliResult<()> {
    let mut store = container.favorites_store()?;
    let outcome = store.replace(label, target)?;
    warn_if_unsynced(&store);
    output::success(&format!("Replaced: {}", outcome.entry));
    if let Some(previous) = outcome.previous_target {
        output::detail(&format!("was: {}", previous));
    }
    Ok(())
}

fn list(container: &ServiceContainer) -> CliResult<()> {
    let store = container.favorites_store()?;
    for entry in store.list() {
        output::info(&entry);
    }
    Ok(())
}

#[instrument(skip(container))]
fn remove_all(container: &ServiceContainer) -> CliResult<()> {
    let mut store = container.favorites_store()?;
    let removed = store.remove_all()?;
    warn_if_unsynced(&store);
    output::success(&format!("All favorites removed ({})", removed));
    Ok(())
}

fn warn_if_unsynced(store: &FavoritesStore) {
    if store.pending_sync() {
        output::warning(
            "favorites changed but preferences were not synchronized; Finder may show the old list until it reloads",
        );
    }
}
