// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use config::builder::DefaultState;
use config::ConfigBuilder;
use std::net::SocketAddr;

pub use state::AppState;
pub use types::Config;

/// Config file name (without extension), optional
const CONFIG_FILE: &str = "fixture";

/// Environment variable prefix, e.g. `FINGER_SERVER__PORT=9000`
const ENV_PREFIX: &str = "FINGER";

impl Config {
    /// Load configuration from `fixture.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("fixture.profile", "full")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "fixture")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)
    }

    /// Effective listen port: configured port or the profile default
    pub fn port(&self) -> u16 {
        self.server
            .port
            .unwrap_or_else(|| self.fixture.profile.default_port())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.port())
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
