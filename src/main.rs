use std::path::PathBuf;

use taktische_zeichen::{init_logging, render_document, LayoutConfig, PathIcon, Point};
use tracing::info;

/// Frame of a friendly land unit: a 3:2 rectangle.
const DEMO_ICON: &str = "M 0 0 H 150 V 100 H 0 Z";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => LayoutConfig::load_from_file(&path)?,
        None => LayoutConfig::default(),
    };

    info!(
        version = taktische_zeichen::VERSION,
        built = taktische_zeichen::BUILD_DATE,
        "rendering demo symbol"
    );

    let icon = PathIcon::new(Point::new(150.0, 100.0), DEMO_ICON)
        .with_attr("fill", "#80e0ff")
        .with_attr("stroke", "black")
        .with_attr("stroke-width", "4");

    println!("{}", render_document(&config, icon));

    Ok(())
}
