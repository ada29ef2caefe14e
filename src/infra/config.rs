//! For reading application configuration.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT: &str = "10s";
const DEFAULT_CONCURRENCY_LIMIT: usize = 500;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    pub address: String,
    /// Http port.
    pub port: u16,
    /// How long a request may take before it is answered with 408.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Maximum number of requests served at once.
    pub concurrency_limit: usize,
    /// Whether to serve the API documentation at `/redoc`.
    pub redoc: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(10),
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            redoc: false,
        }
    }
}

/// Built-in defaults, the lowest-precedence configuration source.
fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.address", DEFAULT_ADDRESS)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default("server.request_timeout", DEFAULT_REQUEST_TIMEOUT)?
        .set_default("server.concurrency_limit", DEFAULT_CONCURRENCY_LIMIT as u64)?
        .set_default("server.redoc", false)
}

/// Retrieve [`Config`] from defaults, an optional `config` file
/// and `APP__`-prefixed environment variables.
#[tracing::instrument]
pub fn load_config() -> color_eyre::Result<Config> {
    let config = with_defaults()?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?
        .try_deserialize()?;
    Ok(config)
}
