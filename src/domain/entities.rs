//! Domain entities: favorites and their targets

use std::fmt;

use crate::domain::DomainError;

/// Target prefixes the Finder sidebar accepts out of the box.
pub const DEFAULT_SCHEMES: [&str; 2] = ["file:///", "nwnode://"];

/// One entry of the Finder sidebar favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    /// Display name shown in the sidebar
    pub label: String,
    /// Resolved target URL, e.g. `file:///Users/u/Dropbox/` or `nwnode://domain-AirDrop`
    pub target: String,
}

impl FavoriteEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for FavoriteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.label, crate::domain::SEPARATOR, self.target)
    }
}

/// A target URL that passed scheme validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteTarget(String);

impl FavoriteTarget {
    /// Validate `raw` against the accepted scheme prefixes.
    ///
    /// Matching is a plain prefix test; `file://host/x` is rejected because
    /// the sidebar only accepts local file URLs.
    pub fn parse(raw: &str, schemes: &[String]) -> Result<Self, DomainError> {
        if schemes.iter().any(|scheme| raw.starts_with(scheme.as_str())) {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::UnsupportedScheme {
                target: raw.to_string(),
                expected: schemes
                    .iter()
                    .map(|s| format!("'{}'", s))
                    .collect::<Vec<_>>()
                    .join(" or "),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reject labels the sidebar cannot display.
pub fn validate_label(label: &str) -> Result<&str, DomainError> {
    if label.trim().is_empty() {
        return Err(DomainError::InvalidLabel(label.to_string()));
    }
    Ok(label)
}

/// Default scheme list as owned strings (the shape `Settings` stores).
pub fn default_schemes() -> Vec<String> {
    DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
}
