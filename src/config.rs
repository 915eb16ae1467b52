//! Server configuration.
//!
//! Values come from command-line flags, falling back to environment variables
//! (a `.env` file is loaded first when present) and then to defaults:
//!
//! - `FRUITSTAND_HOST` - bind address (default: 127.0.0.1)
//! - `FRUITSTAND_PORT` - listen port (default: 3000)
//! - `FRUITSTAND_DB_PATH` - RocksDB directory (default: in-memory storage)
//! - `FRUITSTAND_POOL_SIZE` - store connections (default: 8)
//! - `FRUITSTAND_STORE_TIMEOUT_MS` - bound on a single save (default: 5000)

use crate::infrastructure::pool::MAX_POOL_SIZE;
use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid setting {0}: {1}")]
    Invalid(&'static str, String),
}

/// Storage flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct StorageArgs {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "FRUITSTAND_DB_PATH")]
    pub db_path: Option<PathBuf>,
}

/// Flags for `serve`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, env = "FRUITSTAND_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    #[arg(long, env = "FRUITSTAND_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum number of concurrent store connections.
    #[arg(long, env = "FRUITSTAND_POOL_SIZE", default_value_t = 8)]
    pub pool_size: usize,

    /// Upper bound on saving one order, in milliseconds.
    #[arg(long, env = "FRUITSTAND_STORE_TIMEOUT_MS", default_value_t = 5000)]
    pub store_timeout_ms: u64,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub db_path: Option<PathBuf>,
    pub pool_size: usize,
    pub store_timeout: Duration,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl TryFrom<ServeArgs> for ServerConfig {
    type Error = ConfigError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        if args.pool_size == 0 {
            return Err(ConfigError::Invalid(
                "pool_size",
                "must be at least 1".to_string(),
            ));
        }
        if args.pool_size > MAX_POOL_SIZE {
            return Err(ConfigError::Invalid(
                "pool_size",
                format!("must be at most {MAX_POOL_SIZE}"),
            ));
        }
        if args.store_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "store_timeout_ms",
                "must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            host: args.host,
            port: args.port,
            db_path: args.storage.db_path,
            pool_size: args.pool_size,
            store_timeout: Duration::from_millis(args.store_timeout_ms),
        })
    }
}
