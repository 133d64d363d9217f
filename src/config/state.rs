// Application state module
// Immutable data shared by every connection

use std::sync::Arc;

use super::types::Config;
use crate::fixture::RouteTable;

/// Application state
pub struct AppState {
    pub config: Config,
    pub routes: Arc<RouteTable>,
    /// Cached once; the table is never reloaded
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            routes: Arc::new(RouteTable::for_profile(config.fixture.profile)),
            access_log: config.logging.access_log,
        }
    }
}
