mod config;
mod io;
mod svg;

use anyhow::{Context, Result};
use config::{IconConfig, OUTPUT_PATH};
use log::{debug, info};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = IconConfig::default();
    debug!(
        "Canvas {}px, plate {}px, padding {}, radius {}",
        config.canvas_size,
        config.icon_size,
        config.padding(),
        config.corner_radius
    );

    let document = svg::render(&config);
    let bytes = io::write_file(IconConfig::output_path(), &document)
        .with_context(|| format!("Failed to write icon to {}", OUTPUT_PATH))?;
    info!("Wrote {} bytes", bytes);

    println!("SVG generated at {}", OUTPUT_PATH);
    Ok(())
}
