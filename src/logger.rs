use crate::Result;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

const LOG_FILE: &str = "tasks.log";

/// Sets up file logging next to the data file.
pub fn system_logger(dir: &Path, log_level: &str) -> Result<()> {
    let file = File::create(dir.join(LOG_FILE))?;

    // Single-threaded process, so thread ids add nothing.
    let file_layer = Layer::new()
        .json()
        .with_writer(file)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    // Create an EnvFilter layer to control log levels
    let filter_layer = EnvFilter::new(log_level);

    let subscriber = Registry::default().with(file_layer).with(filter_layer);

    // Set the subscriber as the global default
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Tracing set up.");

    Ok(())
}
