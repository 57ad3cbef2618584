// Configuration module entry point
// Layered loading: defaults -> optional config.toml -> SITE_* env -> PORT env

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The `PORT` environment variable, when set, overrides `server.port`
    /// last; it is the only knob most deployments touch.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SITE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("site.static_root", "static")?
            .set_default("site.fallback_page", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)?; // 10MB

        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port.parse().map_err(|e| {
                config::ConfigError::Message(format!("Invalid PORT value '{port}': {e}"))
            })?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Point at a file that does not exist so only defaults apply
        let cfg = Config::load_from("nonexistent-config").expect("defaults load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.site.static_root, "static");
        assert_eq!(cfg.site.fallback_page, "index.html");
        assert!(cfg.site.pages.is_empty());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.http.max_body_size, 10_485_760);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("nonexistent-config").expect("defaults load");
        let addr = cfg.get_socket_addr().expect("valid addr");
        assert!(addr.ip().is_unspecified());
    }
}
