//! Service container for dependency injection
//!
//! Wires up the favorites store with its dependencies.

use std::sync::Arc;

use crate::application::services::FavoritesStore;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, SharedFileList};
use crate::infrastructure::InfraResult;

/// Container holding the I/O boundaries and settings.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// The OS favorites list
    pub list: Arc<dyn SharedFileList>,
}

impl ServiceContainer {
    /// Create a new service container bound to the Finder sidebar.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let list = open_sidebar_list(&settings)?;
        Ok(Self::with_deps(settings, Arc::new(RealFileSystem), list))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        list: Arc<dyn SharedFileList>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs, list }
    }

    /// Build a store with a fresh snapshot of the list.
    pub fn favorites_store(&self) -> ApplicationResult<FavoritesStore> {
        FavoritesStore::open(self.list.clone(), self.fs.clone(), self.settings.clone())
    }
}

#[cfg(target_os = "macos")]
fn open_sidebar_list(settings: &Settings) -> InfraResult<Arc<dyn SharedFileList>> {
    use crate::infrastructure::launch_services::LaunchServicesList;

    let list = LaunchServicesList::open(&settings.preferences_domain)?;
    Ok(Arc::new(list))
}

#[cfg(not(target_os = "macos"))]
fn open_sidebar_list(_settings: &Settings) -> InfraResult<Arc<dyn SharedFileList>> {
    Err(crate::infrastructure::InfraError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}
