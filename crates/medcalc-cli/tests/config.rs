use std::io::Write;

use medcalc_cli::config::{MedcalcConfig, OutputFormat, load_config, parse_config};
use medcalc_core::models::WeightUnit;

#[test]
fn current_config_parses_directly() {
    let config =
        parse_config(r#"{"config_version": 1, "default_unit": "kilograms", "output": "json"}"#)
            .unwrap();
    assert_eq!(config.default_unit, WeightUnit::Kilograms);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn missing_fields_take_defaults() {
    let config = parse_config(r#"{"config_version": 1}"#).unwrap();
    assert_eq!(config, MedcalcConfig::default());
}

#[test]
fn unversioned_config_is_migrated() {
    let config = parse_config(r#"{"unit": "pounds", "format": "json"}"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.default_unit, WeightUnit::Pounds);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn migration_keeps_new_keys_over_legacy_ones() {
    let config = parse_config(r#"{"unit": "pounds", "default_unit": "grams"}"#).unwrap();
    assert_eq!(config.default_unit, WeightUnit::Grams);
}

#[test]
fn newer_config_versions_are_rejected() {
    let err = parse_config(r#"{"config_version": 9}"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn oversized_version_is_not_read_as_unversioned() {
    let err = parse_config(r#"{"config_version": 4294967296, "unit": "pounds"}"#).unwrap_err();
    assert!(err.to_string().contains("config_version"));
    assert!(parse_config(r#"{"config_version": "1"}"#).is_err());
}

#[test]
fn non_object_config_is_rejected() {
    assert!(parse_config("[1, 2]").is_err());
    assert!(parse_config("not json").is_err());
}

#[test]
fn explicit_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"config_version": 1, "default_unit": "kilograms"}}"#).unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.default_unit, WeightUnit::Kilograms);
    assert_eq!(config.output, OutputFormat::Text);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(load_config(Some(&missing)).is_err());
}
