//! # Taktische Zeichen
//!
//! Places tactical symbol components inside padded SVG canvas regions.
//!
//! ## Architecture
//!
//! The workspace is organized as multiple crates:
//!
//! 1. **taktische-zeichen-core** - Points, padding shorthand, contain/cover placement
//! 2. **taktische-zeichen-svg** - Element traits, SVG tree, applying placements
//! 3. **taktische-zeichen-settings** - Layout configuration in JSON or TOML
//! 4. **taktische-zeichen** - This facade plus a demo binary

pub use taktische_zeichen_core::{
    add_points, calculate_component_position, resolve_padding, subtract_points, Area, Fit,
    LayoutError, Padding, Parent, Placement, Point, ResolvedPadding, Result,
};

pub use taktische_zeichen_svg::{
    place_component, place_component_unpadded, Component, Element, ElementFactory, PathIcon,
    SvgElement, SvgFactory, Transform,
};

pub use taktische_zeichen_settings::{
    ConfigError, ConfigFormat, LayoutConfig, SettingsError, SettingsResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds the log filter from `RUST_LOG`-style directives.
///
/// Empty directives fall back to `info`; otherwise the directives decide on
/// their own, so `debug` enables debug output everywhere.
pub fn log_filter(directives: &str) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so rendered documents on stdout stay clean
/// - RUST_LOG environment variable support
/// - `info` as the default level when RUST_LOG is unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = log_filter(&directives);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Renders `icon` placed according to `config` as a standalone SVG document.
///
/// The fit mode from `config` replaces the icon's own cover flag.
pub fn render_document(config: &LayoutConfig, icon: PathIcon) -> SvgElement {
    let icon = icon.with_fit(config.component_fit());
    let factory = SvgFactory::new();
    let group = place_component(config.parent(), &icon, &config.padding, &factory);
    factory.document(config.parent().size).with_child(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honors_global_level() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_honors_target_directive() {
        let filter = log_filter("taktische_zeichen_core=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
