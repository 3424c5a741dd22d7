// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ResourcesConfig, ServerConfig,
};

impl Config {
    /// Load configuration from "config.toml" in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension).
    /// A missing file is fine; defaults and TAGGER_* environment
    /// variables still apply.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("TAGGER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("resources.entry_file", "Index.html")?
            .set_default("resources.ui_dir", "UI")?
            .set_default("resources.assets_dir", "Assets")?
            .set_default("resources.heightmap_strings", "Assets/Height_Map/Strings.json")?
            .set_default("resources.portrait_strings", "Assets/Portrait/Strings.json")?
            .set_default("resources.upload_dir", "uploads")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::StaticTree;

    #[test]
    fn test_defaults_without_config_file() {
        let config = Config::load_from("no-such-config-file").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.workers, None);
        assert_eq!(config.logging.access_log_format, "combined");
        assert_eq!(config.http.max_body_size, 10_485_760);
        assert_eq!(config.performance.max_connections, None);
        assert_eq!(config.resources.entry_file, "Index.html");
        assert_eq!(config.resources.upload_dir, "uploads");
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let config = Config::load_from("no-such-config-file").unwrap();
        let addr = config.socket_addr().unwrap();

        assert_eq!(addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_tree_dir_mapping() {
        let config = Config::load_from("no-such-config-file").unwrap();

        assert_eq!(config.resources.tree_dir(StaticTree::Ui), "UI");
        assert_eq!(config.resources.tree_dir(StaticTree::Assets), "Assets");
    }
}
