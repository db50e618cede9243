//! Tests for the `LABEL -> TARGET` line format and target validation

use rstest::rstest;

use sidefav::domain::{
    default_schemes, parse_line, validate_label, DomainError, FavoriteEntry, FavoriteTarget,
};

#[rstest]
#[case("Dropbox -> file:///Users/u/Dropbox/", "Dropbox", "file:///Users/u/Dropbox/")]
#[case("AirDrop -> nwnode://domain-AirDrop", "AirDrop", "nwnode://domain-AirDrop")]
#[case("  Home  ->  file:///Users/u/  ", "Home", "file:///Users/u/")]
#[case("A -> B -> file:///x/", "A", "B -> file:///x/")]
#[case("My Files -> file:///Users/u/My%20Files/", "My Files", "file:///Users/u/My%20Files/")]
fn given_valid_line_when_parsing_then_splits_on_first_separator(
    #[case] line: &str,
    #[case] label: &str,
    #[case] target: &str,
) {
    let entry = parse_line(line, 1).unwrap();
    assert_eq!(entry, Some(FavoriteEntry::new(label, target)));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn given_blank_line_when_parsing_then_ignored(#[case] line: &str) {
    assert_eq!(parse_line(line, 7).unwrap(), None);
}

#[rstest]
#[case("badlinewithoutarrow")]
#[case("Label->file:///no/spaces/")]
#[case(" -> file:///no/label/")]
#[case("No target -> ")]
fn given_malformed_line_when_parsing_then_reports_line(#[case] line: &str) {
    let err = parse_line(line, 4).unwrap_err();
    assert_eq!(
        err,
        DomainError::MalformedLine {
            line_no: 4,
            line: line.to_string(),
        }
    );
}

#[rstest]
#[case("file:///Users/u/Dropbox/", true)]
#[case("nwnode://domain-AirDrop", true)]
#[case("file://server/share/", false)]
#[case("/Users/u/Dropbox", false)]
#[case("https://example.com/", false)]
#[case("", false)]
fn given_target_when_validating_then_only_known_schemes_pass(
    #[case] target: &str,
    #[case] accepted: bool,
) {
    assert_eq!(
        FavoriteTarget::parse(target, &default_schemes()).is_ok(),
        accepted
    );
}

#[test]
fn given_custom_schemes_when_validating_then_defaults_no_longer_apply() {
    let schemes = vec!["smb://".to_string()];
    assert!(FavoriteTarget::parse("smb://nas/share", &schemes).is_ok());
    assert!(FavoriteTarget::parse("file:///Users/u/", &schemes).is_err());
}

#[rstest]
#[case("Downloads", true)]
#[case("", false)]
#[case("   ", false)]
fn given_label_when_validating_then_blank_rejected(#[case] label: &str, #[case] ok: bool) {
    assert_eq!(validate_label(label).is_ok(), ok);
}
