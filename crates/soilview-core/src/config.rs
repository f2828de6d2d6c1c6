use crate::error::{Result, SoilviewError};
use crate::models::Variant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the view controller
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub variant: ConfigValue<Variant>,
    pub canvas: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            variant: ConfigValue::new(Variant::Dashboard, ConfigSource::Default),
            canvas: ConfigValue::new("nutrientChart".to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| SoilviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| SoilviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(variant) = file_config.variant {
            self.variant.update(variant, ConfigSource::File);
        }

        if let Some(canvas) = file_config.canvas {
            self.canvas.update(parse_canvas(&canvas)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // SOILVIEW_VARIANT
        if let Ok(variant_str) = env::var("SOILVIEW_VARIANT") {
            match parse_variant(&variant_str) {
                Ok(variant) => self.variant.update(variant, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid SOILVIEW_VARIANT value '{}': expected basic, portal, or dashboard",
                    variant_str
                ),
            }
        }

        // SOILVIEW_CANVAS
        if let Ok(canvas_str) = env::var("SOILVIEW_CANVAS") {
            match parse_canvas(&canvas_str) {
                Ok(canvas) => self.canvas.update(canvas, ConfigSource::Environment),
                Err(_) => tracing::warn!("Ignoring empty SOILVIEW_CANVAS"),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(variant) = overrides.variant {
            self.variant.update(variant, ConfigSource::Cli);
        }

        if let Some(canvas) = overrides.canvas {
            self.canvas.update(parse_canvas(&canvas)?, ConfigSource::Cli);
        }

        Ok(())
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("variant".to_string(), (self.variant.value.to_string(), self.variant.source));
        map.insert("canvas".to_string(), (self.canvas.value.clone(), self.canvas.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    variant: Option<Variant>,
    canvas: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub variant: Option<Variant>,
    pub canvas: Option<String>,
}

/// Parse a variant name
pub fn parse_variant(s: &str) -> Result<Variant> {
    s.parse::<Variant>().map_err(|_| SoilviewError::ConfigInvalid {
        key: "variant".to_string(),
        reason: format!("Invalid variant: {}. Use basic, portal, or dashboard", s),
    })
}

/// Parse a canvas id. Blank names are rejected.
pub fn parse_canvas(s: &str) -> Result<String> {
    let canvas = s.trim();
    if canvas.is_empty() {
        return Err(SoilviewError::ConfigInvalid {
            key: "canvas".to_string(),
            reason: "Canvas id must not be empty".to_string(),
        });
    }
    Ok(canvas.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.variant.value, Variant::Dashboard);
        assert_eq!(config.variant.source, ConfigSource::Default);
        assert_eq!(config.canvas.value, "nutrientChart");
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
variant = "portal"
canvas = "sampleChart"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.variant.value, Variant::Portal);
        assert_eq!(config.variant.source, ConfigSource::File);
        assert_eq!(config.canvas.value, "sampleChart");
    }

    #[test]
    fn test_invalid_file_variant_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"variant = "tabs""#).unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, SoilviewError::ConfigInvalid { ref key, .. } if key == "file"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        config.update_from_cli(CliConfigOverrides {
            variant: Some(Variant::Basic),
            canvas: None,
        })
        .unwrap();

        assert_eq!(config.variant.value, Variant::Basic);
        assert_eq!(config.variant.source, ConfigSource::Cli);
        assert_eq!(config.canvas.source, ConfigSource::Default);
    }

    #[test]
    fn test_blank_canvas_rejected_in_file_and_cli() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"canvas = "  ""#).unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, SoilviewError::ConfigInvalid { ref key, .. } if key == "canvas"));

        let mut config = LayeredConfig::with_defaults();
        let err = config
            .update_from_cli(CliConfigOverrides {
                variant: None,
                canvas: Some(String::new()),
            })
            .unwrap_err();
        assert!(matches!(err, SoilviewError::ConfigInvalid { ref key, .. } if key == "canvas"));
        assert_eq!(config.canvas.value, "nutrientChart");
        assert_eq!(config.canvas.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("basic").unwrap(), Variant::Basic);
        assert_eq!(parse_variant("DASHBOARD").unwrap(), Variant::Dashboard);
        assert!(parse_variant("tabs").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let map = LayeredConfig::with_defaults().to_inspection_map();

        let (variant, source) = &map["variant"];
        assert_eq!(variant, "dashboard");
        assert_eq!(*source, ConfigSource::Default);
        assert!(map.contains_key("canvas"));
    }
}
