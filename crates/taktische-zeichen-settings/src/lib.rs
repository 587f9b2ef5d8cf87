//! Taktische Zeichen Settings Crate
//!
//! Handles layout configuration: defaults, validation and JSON/TOML files.

pub mod config;
pub mod error;

pub use config::{ConfigFormat, LayoutConfig, DEFAULT_PARENT_SIZE};
pub use error::{ConfigError, SettingsError, SettingsResult};
