//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use prism_common::{ColorFormat, ColorMode, ConfigError};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_prism_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[picker]
format = "rgb"
color_modes = ["monochrome", "radial-gradient"]
default_value = "radial-gradient(circle at 50% 50%, #e7000b 0%, #496adc 100%)"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.format, ColorFormat::Rgb);
    assert_eq!(
        config.picker.color_modes,
        vec![ColorMode::Monochrome, ColorMode::RadialGradient]
    );
    // Defaults preserved
    assert_eq!(config.picker.swatch_colors.len(), 12);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_unknown_mode_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[picker]\ncolor_modes = [\"conic-gradient\"]\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[picker]\nswatch_colors = [\"bogus\"]\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.swatch_colors, vec!["bogus"]);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prism").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.format, ColorFormat::Hex);
    assert_eq!(config.picker.color_modes.len(), 3);
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[picker]\nformat = \"rgb\"\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.picker.format, ColorFormat::Rgb);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::PrismConfig;

    let config: PrismConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("prism"));
        assert!(path_str.ends_with("config.toml"));
    }
}
