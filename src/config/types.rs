// Configuration types module
// Defines all configuration-related data structures

use crate::fixture::Profile;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fixture: FixtureConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    /// Listen port; the profile default applies when unset
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Fixture selection
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct FixtureConfig {
    #[serde(default)]
    pub profile: Profile,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (fixture, combined, common, json, or custom pattern)
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
    "fixture".to_string()
}

impl LoggingConfig {
    pub fn is_debug(&self) -> bool {
        self.level.eq_ignore_ascii_case("debug")
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl PerformanceConfig {
    /// Upper bound on the lifetime of an idle or stalled connection
    pub fn connection_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(std::cmp::max(self.read_timeout, self.write_timeout))
    }
}
