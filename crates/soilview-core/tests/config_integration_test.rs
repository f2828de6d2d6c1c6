//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use serial_test::serial;
use soilview_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use soilview_core::memory::{BlobUrlRegistry, RecordingChartBackend};
use soilview_core::models::{Session, Variant, ViewState};
use soilview_core::ViewController;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn clear_env() {
    env::remove_var("SOILVIEW_VARIANT");
    env::remove_var("SOILVIEW_CANVAS");
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
variant = "basic"
# Only override the variant, leave the canvas as default
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.variant.value, Variant::Basic);
    assert_eq!(config.variant.source, ConfigSource::File);
    assert_eq!(config.canvas.value, "nutrientChart");
    assert_eq!(config.canvas.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    env::set_var("SOILVIEW_VARIANT", "portal");
    env::set_var("SOILVIEW_CANVAS", "envChart");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "variant = \"basic\"\ncanvas = \"fileChart\"").unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.variant.value, Variant::Portal);
    assert_eq!(config.variant.source, ConfigSource::Environment);
    assert_eq!(config.canvas.value, "envChart");
    assert_eq!(config.canvas.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("SOILVIEW_VARIANT", "tabs");
    env::set_var("SOILVIEW_CANVAS", "   ");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.variant.value, Variant::Dashboard);
    assert_eq!(config.variant.source, ConfigSource::Default);
    assert_eq!(config.canvas.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_full_configuration_workflow() {
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("soilview.toml");
    fs::write(
        &config_path,
        r#"
variant = "basic"
canvas = "fileChart"
"#,
    )
    .unwrap();

    env::set_var("SOILVIEW_VARIANT", "portal");

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(&config_path)
        .unwrap()
        .load_from_env();

    assert_eq!(config.variant.value, Variant::Portal); // From env
    assert_eq!(config.canvas.value, "fileChart"); // From file

    config.update_from_cli(CliConfigOverrides {
        variant: Some(Variant::Dashboard),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.variant.value, Variant::Dashboard);
    assert_eq!(config.variant.source, ConfigSource::Cli);
    assert_eq!(config.canvas.source, ConfigSource::File);

    clear_env();
}

#[test]
fn test_invalid_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "invalid toml content [[[").unwrap();

    assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let non_existent = temp_dir.path().join("does_not_exist.toml");

    assert!(LayeredConfig::with_defaults().load_from_file(&non_existent).is_err());
}

#[test]
fn test_controller_uses_configured_variant() {
    let mut config = LayeredConfig::with_defaults();
    config.update_from_cli(CliConfigOverrides {
        variant: Some(Variant::Basic),
        canvas: Some("plot".to_string()),
    })
    .unwrap();

    let mut vc = ViewController::from_config(
        Session::authenticated(),
        &config,
        BlobUrlRegistry::new(),
        RecordingChartBackend::new(),
    );

    assert_eq!(vc.variant(), Variant::Basic);
    assert_eq!(vc.canvas().as_str(), "plot");
    assert_eq!(vc.sample().id, "SAMPLE-001");

    // The basic mockup has no dashboard route
    vc.navigate(ViewState::Dashboard).unwrap();
    assert_eq!(vc.view(), ViewState::Login);
}
