// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Site configuration: where pages live and how request paths map to them
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory pages and assets are served from
    #[serde(default = "default_static_root")]
    pub static_root: String,
    /// Entry page served for `/` and for every path that resolves to nothing
    #[serde(default = "default_fallback_page")]
    pub fallback_page: String,
    /// Explicitly named pages, request path -> file under the static root.
    /// Exact-match entries ahead of the generic disk lookup; the lookup
    /// subsumes them, they only pin the mapping.
    #[serde(default)]
    pub pages: BTreeMap<String, String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_static_root() -> String {
    "static".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_fallback_page() -> String {
    "index.html".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_root: default_static_root(),
            fallback_page: default_fallback_page(),
            pages: BTreeMap::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
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

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
    #[serde(default = "default_backlog")]
    pub backlog: i32,
}

#[allow(clippy::missing_const_for_fn)]
fn default_backlog() -> i32 {
    128
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
    pub max_body_size: u64,
}
