//! Tests for CLI command dispatch against an injected favorites list

use std::sync::Arc;

use tempfile::TempDir;

use sidefav::cli::commands::execute_command;
use sidefav::cli::{Action, CliError, ExportTarget};
use sidefav::config::Settings;
use sidefav::exitcode;
use sidefav::infrastructure::di::ServiceContainer;
use sidefav::infrastructure::memory::MemoryList;
use sidefav::infrastructure::traits::{RealFileSystem, SharedFileList};
use sidefav::util::testing;

fn container_with(list: &Arc<MemoryList>) -> ServiceContainer {
    testing::init_test_setup();
    ServiceContainer::with_deps(Settings::default(), Arc::new(RealFileSystem), list.clone())
}

fn labels(list: &MemoryList) -> Vec<String> {
    list.snapshot()
        .unwrap()
        .into_iter()
        .filter_map(|item| item.display_name)
        .collect()
}

#[test]
fn given_add_after_action_when_executing_then_list_is_updated() {
    // Arrange
    let list = Arc::new(MemoryList::with_entries(&[
        ("Desktop", "file:///Users/u/Desktop/"),
        ("Downloads", "file:///Users/u/Downloads/"),
    ]));
    let container = container_with(&list);
    let action = Action::Add {
        label: "AirDrop".into(),
        target: "nwnode://domain-AirDrop".into(),
        after: Some("Desktop".into()),
    };

    // Act
    execute_command(&action, &container).unwrap();

    // Assert
    assert_eq!(labels(&list), vec!["Desktop", "AirDrop", "Downloads"]);
}

#[test]
fn given_remove_of_absent_label_when_executing_then_noinput_exit_code() {
    // Arrange
    let list = Arc::new(MemoryList::with_entries(&[("Desktop", "file:///Users/u/Desktop/")]));
    let container = container_with(&list);

    // Act
    let err = execute_command(&Action::Remove("Nope".into()), &container).unwrap_err();

    // Assert
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
    assert_eq!(labels(&list), vec!["Desktop"]);
}

#[test]
fn given_plain_path_target_when_adding_then_dataerr_exit_code() {
    // Arrange
    let list = Arc::new(MemoryList::new());
    let container = container_with(&list);
    let action = Action::Add {
        label: "Home".into(),
        target: "/Users/u".into(),
        after: None,
    };

    // Act
    let err = execute_command(&action, &container).unwrap_err();

    // Assert
    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert!(list.items().is_empty());
}

#[test]
fn given_export_then_import_when_executing_then_favorites_restored() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("favorites.txt");
    let list = Arc::new(MemoryList::with_entries(&[
        ("Dropbox", "file:///Users/u/Dropbox/"),
        ("AirDrop", "nwnode://domain-AirDrop"),
    ]));
    let container = container_with(&list);
    execute_command(&Action::Export(ExportTarget::File(path.clone())), &container).unwrap();
    execute_command(&Action::RemoveAll, &container).unwrap();
    assert!(labels(&list).is_empty());

    // Act
    execute_command(&Action::Import(path), &container).unwrap();

    // Assert
    assert_eq!(labels(&list), vec!["Dropbox", "AirDrop"]);
}

#[test]
fn given_import_from_stdout_marker_when_executing_then_invalid_args() {
    // Arrange
    let list = Arc::new(MemoryList::with_entries(&[("Desktop", "file:///Users/u/Desktop/")]));
    let container = container_with(&list);

    // Act
    let err = execute_command(&Action::Import("-".into()), &container).unwrap_err();

    // Assert
    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert_eq!(labels(&list), vec!["Desktop"]);
}

#[test]
fn given_replace_action_when_executing_then_entry_moves_to_head() {
    // Arrange
    let list = Arc::new(MemoryList::with_entries(&[
        ("Desktop", "file:///Users/u/Desktop/"),
        ("Work", "file:///Users/u/Work/"),
    ]));
    let container = container_with(&list);
    let action = Action::Replace {
        label: "Work".into(),
        target: "file:///Volumes/Data/Work/".into(),
    };

    // Act
    execute_command(&action, &container).unwrap();

    // Assert
    let items = list.items();
    assert_eq!(items[0].display_name.as_deref(), Some("Work"));
    assert_eq!(items[0].resolved_url.as_deref(), Some("file:///Volumes/Data/Work/"));
    assert_eq!(items.len(), 2);
}
