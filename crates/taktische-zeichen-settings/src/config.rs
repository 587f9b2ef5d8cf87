//! Layout configuration
//!
//! Stores the defaults used when placing a component: fit mode, padding
//! shorthand and the parent region. Supports JSON and TOML files.
//!
//! ```toml
//! fit = "cover"
//! padding = [10, 20]
//!
//! [parent]
//! size = [100, 100]
//! paintable_area = [[0, 0], [100, 80]]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use taktische_zeichen_core::{Fit, Padding, Parent, Point};
use tracing::{debug, info};

use crate::error::{ConfigError, SettingsResult};

/// Edge length of the default square parent.
pub const DEFAULT_PARENT_SIZE: f64 = 100.0;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

/// Placement defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fit mode for components
    pub fit: Fit,
    /// Padding shorthand inside the paintable area
    pub padding: Padding,
    /// Region components are placed into
    pub parent: Parent,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fit: Fit::Contain,
            padding: Padding::NONE,
            parent: Parent::new(Point::new(DEFAULT_PARENT_SIZE, DEFAULT_PARENT_SIZE)),
        }
    }
}

impl LayoutConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config = match format {
            ConfigFormat::Json => Self::from_json_str(&content)?,
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
        };

        info!(path = %path.display(), fit = %config.fit, "loaded layout config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved layout config");
        Ok(())
    }

    /// Validate configuration
    ///
    /// The parent must have a finite, positive size. Padding and paintable
    /// area are not range checked; oversized padding yields a negative scale.
    pub fn validate(&self) -> SettingsResult<()> {
        let size = self.parent.size;
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "parent.size".to_string(),
                value: size.to_string(),
            }
            .into());
        }

        if let Some(area) = self.parent.paintable_area {
            if !area.top_left.is_finite() || !area.bottom_right.is_finite() {
                return Err(ConfigError::ValueOutOfRange {
                    key: "parent.paintable_area".to_string(),
                    value: format!("{} {}", area.top_left, area.bottom_right),
                }
                .into());
            }
        }

        if self.padding.to_vec().iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange {
                key: "padding".to_string(),
                value: format!("{:?}", self.padding.to_vec()),
            }
            .into());
        }

        Ok(())
    }

    /// Replaces the padding from a shorthand slice.
    pub fn set_padding(&mut self, values: &[f64]) -> SettingsResult<()> {
        self.padding = Padding::from_slice(values)?;
        Ok(())
    }

    /// Fit mode for placed components.
    pub fn component_fit(&self) -> Fit {
        self.fit
    }

    pub fn parent(&self) -> &Parent {
        &self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use taktische_zeichen_core::Area;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::new();
        assert_eq!(config.fit, Fit::Contain);
        assert_eq!(config.padding, Padding::NONE);
        assert_eq!(config.parent.size, Point::new(100.0, 100.0));
        assert!(config.parent.paintable_area.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = LayoutConfig::from_toml_str(
            r#"
            fit = "cover"
            padding = [10, 20]

            [parent]
            size = [100, 100]
            paintable_area = [[0, 0], [100, 80]]
            "#,
        )
        .unwrap();
        assert_eq!(config.component_fit(), Fit::Cover);
        assert_eq!(config.padding, Padding::Symmetric(10.0, 20.0));
        assert_eq!(
            config.parent().paintable_area,
            Some(Area::new(Point::ZERO, Point::new(100.0, 80.0)))
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = LayoutConfig::from_json_str(r#"{ "padding": [1, 2, 3] }"#).unwrap();
        assert_eq!(config.fit, Fit::Contain);
        assert_eq!(config.padding, Padding::Three(1.0, 2.0, 3.0));
        assert_eq!(config.parent.size, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_invalid_padding_arity_is_rejected() {
        let result = LayoutConfig::from_json_str(r#"{ "padding": [1] }"#);
        assert!(matches!(result, Err(SettingsError::JsonError(_))));

        let mut config = LayoutConfig::new();
        let result = config.set_padding(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(matches!(result, Err(SettingsError::Layout(_))));
        assert_eq!(config.padding, Padding::NONE);
    }

    #[test]
    fn test_validate_rejects_empty_parent() {
        let result = LayoutConfig::from_json_str(r#"{ "parent": { "size": [0, 100] } }"#);
        match result {
            Err(SettingsError::Config(ConfigError::ValueOutOfRange { key, .. })) => {
                assert_eq!(key, "parent.size")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("layout.json")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("layout.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("layout.yaml")),
            Err(SettingsError::Config(ConfigError::UnsupportedFormat(ext))) if ext == "yaml"
        ));
    }
}
