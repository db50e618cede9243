use std::path::PathBuf;

/// Expand `~`, `$VAR` and `${VAR}` in a user supplied path.
///
/// Falls back to the raw string when a variable is undefined.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::full(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    PathBuf::from(expanded)
}
