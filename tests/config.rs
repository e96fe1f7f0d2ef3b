mod helper;

use tempfile::TempDir;
use version_labels::config::{Config, ConfigError, ConfigSource};
use version_labels::display::{Formatter, UnknownVersionPolicy};
use version_labels::version::catalog::VersionCatalog;

use helper::write_config;

#[test]
fn from_file_loads_catalog_and_policy() {
    let (_temp_dir, path) = write_config(
        r#"{
            "catalog": ["1.2", "1.1", "1.0", "b1.7", "b1.6"],
            "unknownVersions": "drop"
        }"#,
    );

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        config.catalog,
        VersionCatalog::new(["1.2", "1.1", "1.0", "b1.7", "b1.6"]).unwrap()
    );
    assert_eq!(config.unknown_versions, UnknownVersionPolicy::Drop);
}

#[test]
fn loaded_config_drives_formatter() {
    let (_temp_dir, path) = write_config(
        r#"{
            "catalog": ["1.2", "1.1", "1.0", "b1.7", "b1.6"],
            "unknownVersions": "drop"
        }"#,
    );
    let (config, source) = Config::load(Some(&path)).unwrap();
    assert_eq!(source, ConfigSource::File(path.clone()));
    let formatter =
        Formatter::new(&config.catalog).with_unknown_versions(config.unknown_versions);

    let labels = formatter.format(&["b1.6", "1.0", "snapshot", "1.1", "b1.7", "1.2"]);

    assert_eq!(labels, vec!["1.x", "b1.7-b1.6"]);
}

#[test]
fn explicit_missing_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let result = Config::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn malformed_json_is_an_error() {
    let (_temp_dir, path) = write_config("{ \"catalog\": ");

    let result = Config::from_file(&path);

    assert!(matches!(result, Err(ConfigError::Json { .. })));
}

#[test]
fn duplicate_catalog_entries_are_reported_as_json_error() {
    let (_temp_dir, path) = write_config(r#"{ "catalog": ["1.0", "1.1", "1.0"] }"#);

    let result = Config::from_file(&path);

    let Err(ConfigError::Json { source, .. }) = result else {
        panic!("expected a JSON error");
    };
    assert!(source.to_string().contains("Duplicate catalog entry: 1.0"));
}
