//! File-based tracing setup.
//!
//! The terminal belongs to the game while it runs, so log output goes to
//! `flappy.log` in the platform data directory instead. `RUST_LOG` controls
//! the filter and defaults to `info`.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "flappy.log";

/// Where the log file lives, creating its directory if needed.
pub fn log_file_path() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "flappy").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;

    let data_dir = project_dirs.data_local_dir();
    fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Returns the path being written to.
pub fn init_logging() -> io::Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}
