// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::routing::StaticTree;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
    pub resources: ResourcesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker thread count (None = one per CPU core)
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Maximum accepted request body size in bytes
    pub max_body_size: u64,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// On-disk layout of everything the server exposes.
/// Relative paths are resolved against the working directory.
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Entry page served at "/" and "/index.html"
    pub entry_file: String,
    pub ui_dir: String,
    pub assets_dir: String,
    pub heightmap_strings: String,
    pub portrait_strings: String,
    /// Destination for uploaded files, created at startup
    pub upload_dir: String,
}

impl ResourcesConfig {
    /// Directory a whitelisted static tree is served from.
    pub fn tree_dir(&self, tree: StaticTree) -> &str {
        match tree {
            StaticTree::Ui => &self.ui_dir,
            StaticTree::Assets => &self.assets_dir,
        }
    }
}
