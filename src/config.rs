//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;

use crate::listing::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::types::{InventoryError, InventoryResult};

pub const DATA_PATH_VAR: &str = "INVENTORY_DATA_PATH";
pub const BIND_ADDR_VAR: &str = "INVENTORY_BIND_ADDR";
pub const LOW_STOCK_VAR: &str = "INVENTORY_LOW_STOCK_THRESHOLD";
pub const ANALYTICS_TTL_VAR: &str = "INVENTORY_ANALYTICS_TTL_SECS";
pub const RECENT_DAYS_VAR: &str = "INVENTORY_RECENT_DAYS";

/// Runtime settings for the inventory server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON-lines file the catalog is loaded from
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub low_stock_threshold: f64,
    /// How long dashboard analytics are served from cache
    pub analytics_ttl: Duration,
    /// Products created within this window count as recent
    pub recent_window: TimeDelta,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            data_path: current_dir.join("inventory.jsonl"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            analytics_ttl: Duration::from_secs(30),
            recent_window: TimeDelta::weeks(1),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> InventoryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> InventoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR) {
            config.data_path = resolve_path(&path);
        }
        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = parse_var(BIND_ADDR_VAR, &addr)?;
        }
        if let Some(threshold) = lookup(LOW_STOCK_VAR) {
            config.low_stock_threshold = parse_var(LOW_STOCK_VAR, &threshold)?;
        }
        if let Some(ttl) = lookup(ANALYTICS_TTL_VAR) {
            config.analytics_ttl = Duration::from_secs(parse_var(ANALYTICS_TTL_VAR, &ttl)?);
        }
        if let Some(days) = lookup(RECENT_DAYS_VAR) {
            config.recent_window = parse_days(RECENT_DAYS_VAR, &days)?;
        }

        Ok(config)
    }
}

/// Relative paths resolve against the working directory
fn resolve_path(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> InventoryResult<T> {
    value.trim().parse().map_err(|_| InventoryError::Config {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// A positive whole number of days that fits in a [`TimeDelta`]
fn parse_days(key: &str, value: &str) -> InventoryResult<TimeDelta> {
    let days: i64 = parse_var(key, value)?;
    match TimeDelta::try_days(days) {
        Some(window) if days > 0 => Ok(window),
        _ => Err(InventoryError::Config {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
