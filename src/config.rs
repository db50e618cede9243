//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sidefav/sidefav.toml` (or an explicit file)
//! 3. Environment variables: `SIDEFAV_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::default_schemes;

/// Preferences domain that owns the sidebar lists.
pub const SIDEBAR_PREFERENCES_DOMAIN: &str = "com.apple.sidebarlists";

/// Unified configuration for sidefav.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Domain flushed after every write (default: com.apple.sidebarlists)
    pub preferences_domain: String,
    /// Accepted target prefixes (default: file:///, nwnode://)
    pub schemes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferences_domain: SIDEBAR_PREFERENCES_DOMAIN.to_string(),
            schemes: default_schemes(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub preferences_domain: Option<String>,
    pub schemes: Option<Vec<String>>,
}

/// Get the XDG config directory for sidefav.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sidefav").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sidefav.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Apply a config file onto self. Arrays REPLACE, they do not merge.
    fn apply(&self, raw: &RawSettings) -> Self {
        Self {
            preferences_domain: raw
                .preferences_domain
                .clone()
                .unwrap_or_else(|| self.preferences_domain.clone()),
            schemes: raw.schemes.clone().unwrap_or_else(|| self.schemes.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global XDG file when given
    ///
    /// # Errors
    /// A missing explicit file, an unreadable or malformed TOML file, or an
    /// empty `schemes` list yields `ApplicationError::Config`.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Explicit file must exist; the global one is optional
        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                current = current.apply(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        current = current.apply(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        // 3. Apply environment variables (replaces - explicit override)
        current = Self::apply_env_overrides(current)?;

        if current.schemes.is_empty() {
            return Err(ApplicationError::Config {
                message: "schemes must not be empty".into(),
            });
        }

        Ok(current)
    }

    /// Apply SIDEFAV_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("SIDEFAV")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("schemes")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("preferences_domain") {
            settings.preferences_domain = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("schemes") {
            settings.schemes = val;
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overrides_when_default_then_targets_sidebar_domain() {
        let settings = Settings::default();
        assert_eq!(settings.preferences_domain, "com.apple.sidebarlists");
        assert_eq!(settings.schemes, vec!["file:///", "nwnode://"]);
    }

    #[test]
    fn given_partial_raw_settings_when_applying_then_keeps_unspecified_fields() {
        let raw = RawSettings {
            preferences_domain: None,
            schemes: Some(vec!["file:///".into()]),
        };

        let merged = Settings::default().apply(&raw);

        assert_eq!(merged.preferences_domain, SIDEBAR_PREFERENCES_DOMAIN);
        assert_eq!(merged.schemes, vec!["file:///"]);
    }
}
