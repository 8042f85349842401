//! Property-based tests for the configuration tables using proptest

use proptest::prelude::*;
use tempfile::TempDir;
use unbabel::config::{parse_format, resolve, LevelSpec};
use unbabel::prelude::*;

fn accepted_level() -> impl Strategy<Value = (&'static str, LogLevel)> {
    prop_oneof![
        Just(("debug", LogLevel::Debug)),
        Just(("info", LogLevel::Info)),
        Just(("warn", LogLevel::Warn)),
        Just(("err", LogLevel::Error)),
    ]
}

fn accepted_format() -> impl Strategy<Value = (&'static str, OutputFormat)> {
    prop_oneof![
        Just(("", OutputFormat::Json)),
        Just(("json", OutputFormat::Json)),
        Just(("text", OutputFormat::Text)),
        Just(("logfmt", OutputFormat::Text)),
    ]
}

proptest! {
    /// An unset level resolves to a silent logger whatever else is passed
    #[test]
    fn test_unset_level_always_discards(
        app_name in ".{0,8}",
        format in ".{0,12}",
        destination in ".{0,24}",
        add_source in any::<bool>(),
    ) {
        let logger = resolve(&app_name, "", &format, &destination, add_source).unwrap();

        prop_assert_eq!(logger.min_level(), LogLevel::Off);
        for level in LogLevel::EMITTABLE {
            prop_assert!(!logger.enabled(level));
        }
    }

    /// Accepted levels map to exactly one threshold
    #[test]
    fn test_accepted_levels_map_exactly(
        (spelling, expected) in accepted_level(),
        (format, expected_format) in accepted_format(),
    ) {
        let logger = resolve("svc", spelling, format, "stderr", false).unwrap();

        prop_assert_eq!(logger.min_level(), expected);
        prop_assert_eq!(logger.format(), Some(expected_format));
    }

    /// Anything outside the level table fails and never creates the destination
    #[test]
    fn test_unknown_levels_fail_without_side_effects(level in "[a-zA-Z ]{1,10}") {
        prop_assume!(!LevelSpec::ACCEPTED.contains(&level.as_str()));

        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("untouched.log");

        let err = resolve("svc", &level, "", log_file.to_str().unwrap(), false).unwrap_err();

        prop_assert!(err.is_invalid_config());
        prop_assert_eq!(err.to_string(), format!("invalid log level: {}", level));
        prop_assert!(!log_file.exists());
    }

    /// Anything outside the format table fails
    #[test]
    fn test_unknown_formats_fail(format in "[a-z]{1,10}") {
        prop_assume!(!["json", "text", "logfmt"].contains(&format.as_str()));

        let err = parse_format(&format).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("invalid handler format: {}", format));
    }

    /// Only an empty app name attaches the app-name field
    #[test]
    fn test_app_name_field_rule(app_name in "[a-z-]{0,6}") {
        let logger = resolve(&app_name, "info", "", "stderr", false).unwrap();

        prop_assert_eq!(logger.fields().get("app-name").is_some(), app_name.is_empty());
    }
}

#[test]
fn test_level_table_is_exhaustive() {
    for spelling in LevelSpec::ACCEPTED {
        assert!(LevelSpec::parse(spelling).is_ok(), "{spelling:?} should parse");
    }
}
