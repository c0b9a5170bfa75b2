use std::{fs::File, path::PathBuf};

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "ditty.log";

pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DITTY_DATA") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("", "", "ditty")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".data"))
}

/// Logs go to a file; stdout belongs to the terminal UI.
pub fn initialize_logging() -> Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env("DITTY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
