// Application state module
// Shared immutable state handed to every connection task

use std::io;
use std::path::PathBuf;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Upload destination as configured, usually relative to the
    /// working directory.
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Build the state, creating the upload directory if it is missing.
    pub fn initialize(config: Config) -> io::Result<Self> {
        let upload_dir = PathBuf::from(&config.resources.upload_dir);
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self { config, upload_dir })
    }

    /// Absolute form of the upload directory for the startup banner.
    pub fn upload_dir_absolute(&self) -> PathBuf {
        self.upload_dir
            .canonicalize()
            .unwrap_or_else(|_| self.upload_dir.clone())
    }
}
