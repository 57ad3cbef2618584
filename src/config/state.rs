// Application state module
// Immutable per-process state shared by every connection task

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::routing::RouteTable;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Route table compiled once at startup from the site config
    pub routes: RouteTable,
    pub shutdown: Arc<Notify>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            routes: RouteTable::from_site(&config.site),
            cached_access_log: AtomicBool::new(config.logging.access_log),
            shutdown: Arc::new(Notify::new()),
            config: config.clone(),
        }
    }
}
