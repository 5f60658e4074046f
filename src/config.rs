//! Configuration for NotRedis
//!
//! Two layers:
//! - [`Config`]: the YAML file model, every field defaulted
//! - [`ServerConfig`]: the resolved, typed settings the server runs with
//!
//! ```yaml
//! engine:
//!   type: in_memory
//! network:
//!   address: "127.0.0.1:3223"
//!   max_connections: 100
//!   max_message_size: "4KB"
//!   idle_timeout: "5m"
//! logging:
//!   level: info
//!   output: stderr
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Default listen address
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3223";

/// Default cap on concurrent client connections
pub const DEFAULT_MAX_CONNECTIONS: usize = 100;

/// Message size used for anything other than `1KB` / `2KB`
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 4096;

/// Idle timeout used when the configured one is zero or unparseable
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

// =============================================================================
// File Model
// =============================================================================

/// Configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which storage engine backs the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    #[default]
    InMemory,
}

/// Engine-related configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(rename = "type", default)]
    pub kind: EngineKind,
    /// Preallocation hint for the key map (not a limit)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: EngineKind::default(),
            capacity: default_capacity(),
        }
    }
}

/// Network-related configuration, kept in its textual form
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    #[serde(default = "default_max_message_size")]
    pub max_message_size: String,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            max_connections: default_max_connections(),
            max_message_size: default_max_message_size(),
            idle_timeout: default_idle_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (`info`, `debug`, `notredis=trace`, ...)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `stderr`, `stdout`, or a file path opened in append mode
    #[serde(default = "default_log_output")]
    pub output: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: default_log_output(),
        }
    }
}

fn default_capacity() -> usize {
    100
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_max_connections() -> usize {
    DEFAULT_MAX_CONNECTIONS
}

fn default_max_message_size() -> String {
    "4KB".to_string()
}

fn default_idle_timeout() -> String {
    "5m".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stderr".to_string()
}

impl Config {
    /// Load the config file at `path`.
    ///
    /// A missing file yields the defaults. A file that exists but does not
    /// parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::from_yaml(&contents)
    }

    /// Parse a YAML document
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Resolve the network section into typed server settings
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            address: self.network.address.clone(),
            max_connections: self.network.max_connections,
            max_message_size: parse_message_size(&self.network.max_message_size),
            idle_timeout: parse_duration(&self.network.idle_timeout)
                .filter(|d| !d.is_zero())
                .unwrap_or(DEFAULT_IDLE_TIMEOUT),
        }
    }
}

// =============================================================================
// Resolved Server Settings
// =============================================================================

/// Settings the TCP server runs with
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP listen address
    pub address: String,

    /// Max concurrent client connections
    pub max_connections: usize,

    /// Max bytes per request line, newline included
    pub max_message_size: usize,

    /// Rolling read deadline, re-armed before every request
    pub idle_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Create a new config builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig
#[derive(Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    /// Set the TCP listen address
    pub fn address(mut self, addr: impl Into<String>) -> Self {
        self.config.address = addr.into();
        self
    }

    /// Set the maximum number of concurrent connections
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    /// Set the maximum request line size (in bytes)
    pub fn max_message_size(mut self, size: usize) -> Self {
        self.config.max_message_size = size;
        self
    }

    /// Set the idle timeout
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.idle_timeout = timeout;
        self
    }

    pub fn build(self) -> ServerConfig {
        self.config
    }
}

// =============================================================================
// Value Parsing
// =============================================================================

/// Map the textual message size onto bytes. Only `1KB` and `2KB` are
/// recognised; everything else is 4096.
pub fn parse_message_size(size: &str) -> usize {
    match size {
        "1KB" => 1024,
        "2KB" => 2048,
        _ => DEFAULT_MAX_MESSAGE_SIZE,
    }
}

/// Parse a duration such as `300ms`, `1.5h` or `2h45m`.
///
/// Units: `ns`, `us` (`µs`), `ms`, `s`, `m`, `h`. A bare `0` is accepted.
/// Returns `None` for anything malformed, including negative values.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    if text == "0" {
        return Some(Duration::ZERO);
    }
    if text.is_empty() {
        return None;
    }

    let mut rest = text;
    let mut nanos = 0f64;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_end == 0 {
            return None;
        }
        let value: f64 = rest[..number_end].parse().ok()?;
        rest = &rest[number_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_end] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        nanos += value * scale;
        rest = &rest[unit_end..];
    }

    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos as u64))
}
