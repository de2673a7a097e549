//! Configuration for the Artist API
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ArtistError, Result};

/// Main configuration for an Artist API instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Interface to bind
    pub host: String,

    /// TCP port (`PORT`)
    pub port: u16,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backend selected by the connection string (`DATABASE_URL`)
    pub store: StoreConfig,

    // -------------------------------------------------------------------------
    // HTTP Configuration
    // -------------------------------------------------------------------------
    /// Directory served for paths no route claims
    pub static_dir: PathBuf,

    /// Value of `Access-Control-Allow-Origin`; `*` allows any origin
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: Self::DEFAULT_PORT,
            store: StoreConfig::Sled {
                path: PathBuf::from("./artist_data"),
            },
            static_dir: PathBuf::from("public"),
            cors_origin: "*".to_string(),
        }
    }
}

impl Config {
    /// Port used when `PORT` is unset
    pub const DEFAULT_PORT: u16 = 5005;

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` string handed to the listener (host may be a name)
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the interface to bind
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the storage backend
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Set the static file directory
    pub fn static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.static_dir = path.into();
        self
    }

    /// Set the allowed CORS origin
    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.cors_origin = origin.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

// =============================================================================
// Store Connection Strings
// =============================================================================

/// Storage backend, parsed from a connection string
///
/// - `memory://` → volatile in-process store
/// - `sled://<path>` → sled database directory at `<path>`
/// - `<path>` (no scheme) → same as `sled://<path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    InMemory,
    Sled { path: PathBuf },
}

impl FromStr for StoreConfig {
    type Err = ArtistError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ArtistError::Config("empty database connection string".to_string()));
        }

        match s.split_once("://") {
            Some(("memory", _)) => Ok(StoreConfig::InMemory),
            Some(("sled", "")) => Err(ArtistError::Config(
                "sled connection string needs a path, e.g. sled://./artist_data".to_string(),
            )),
            Some(("sled", path)) => Ok(StoreConfig::Sled {
                path: PathBuf::from(path),
            }),
            Some((scheme, _)) => Err(ArtistError::Config(format!(
                "unsupported database scheme '{}' (expected memory:// or sled://)",
                scheme
            ))),
            None => Ok(StoreConfig::Sled {
                path: PathBuf::from(s),
            }),
        }
    }
}

impl fmt::Display for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreConfig::InMemory => write!(f, "memory://"),
            StoreConfig::Sled { path } => write!(f, "sled://{}", path.display()),
        }
    }
}
