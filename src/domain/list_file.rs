//! Text format shared by export and import
//!
//! One favorite per line: `LABEL -> TARGET`. Blank lines are ignored.
//! Only the first separator splits, so targets may contain ` -> `.

use crate::domain::{DomainError, FavoriteEntry};

/// Literal separator between label and target.
pub const SEPARATOR: &str = " -> ";

/// Parse one line of an import file.
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<FavoriteEntry>, DomainError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || DomainError::MalformedLine {
        line_no,
        line: line.to_string(),
    };

    let (label, target) = line.split_once(SEPARATOR).ok_or_else(malformed)?;
    let (label, target) = (label.trim(), target.trim());
    if label.is_empty() || target.is_empty() {
        return Err(malformed());
    }

    Ok(Some(FavoriteEntry::new(label, target)))
}

/// Render entries in snapshot order, one per line, newline terminated.
pub fn format_entries(entries: &[FavoriteEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_entries_when_formatting_then_one_line_each() {
        let entries = vec![
            FavoriteEntry::new("Dropbox", "file:///Users/u/Dropbox/"),
            FavoriteEntry::new("AirDrop", "nwnode://domain-AirDrop"),
        ];
        assert_eq!(
            format_entries(&entries),
            "Dropbox -> file:///Users/u/Dropbox/\nAirDrop -> nwnode://domain-AirDrop\n"
        );
    }

    #[test]
    fn given_no_entries_when_formatting_then_empty() {
        assert_eq!(format_entries(&[]), "");
    }
}
