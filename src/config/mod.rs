//! Service configuration loaded from YAML
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration:
//!
//! ```yaml
//! bind: 0.0.0.0:8080
//! log_level: debug
//! cors: false
//! seed:
//!   dishes:
//!     - id: 3c637d011d844ebab1205fef8a7e36ea
//!       name: Broccoli and beetroot stir fry
//!       description: Crunchy stir fry
//!       price: 15
//!       image_url: https://images.example.com/stir-fry.jpg
//!   orders: []
//! ```

use crate::core::{ConfigError, Record};
use crate::entities::{Dish, Order};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable naming the config file when no path argument is given
pub const CONFIG_ENV: &str = "GRUBDASH_CONFIG";
/// Overrides `bind`
pub const BIND_ENV: &str = "GRUBDASH_BIND";
/// Overrides `log_level`
pub const LOG_ENV: &str = "GRUBDASH_LOG";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Records loaded into the stores at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Socket address to listen on
    pub bind: String,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Whether to answer cross-origin requests permissively
    pub cors: bool,

    pub seed: SeedData,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cors: true,
            seed: SeedData::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve the configuration for a process
    ///
    /// Reads `path` when given, applies the environment overrides and
    /// validates the result.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        let config = config.with_overrides(
            std::env::var(BIND_ENV).ok(),
            std::env::var(LOG_ENV).ok(),
        );
        config.validate()?;
        Ok(config)
    }

    /// Replace `bind` and `log_level` with any non-empty override
    pub fn with_overrides(mut self, bind: Option<String>, log_level: Option<String>) -> Self {
        if let Some(bind) = bind.filter(|b| !b.trim().is_empty()) {
            self.bind = bind;
        }
        if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "bind".to_string(),
                value: self.bind.clone(),
                message: e.to_string(),
            })
    }

    /// Check the configuration for values the service cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        let mut seen = HashSet::new();
        for (index, dish) in self.seed.dishes.iter().enumerate() {
            if !seen.insert(dish.id.as_str()) {
                return Err(ConfigError::DuplicateSeedId {
                    entity: Dish::label(),
                    id: dish.id.clone(),
                });
            }
            if dish.price.is_nan() || dish.price <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("seed.dishes[{}].price", index),
                    value: dish.price.to_string(),
                    message: "price must be above zero".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for (index, order) in self.seed.orders.iter().enumerate() {
            if !seen.insert(order.id.as_str()) {
                return Err(ConfigError::DuplicateSeedId {
                    entity: Order::label(),
                    id: order.id.clone(),
                });
            }
            if order.dishes.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("seed.orders[{}].dishes", index),
                    value: "[]".to_string(),
                    message: "an order needs at least one dish".to_string(),
                });
            }
            if let Some(line) = order.dishes.iter().position(|d| d.quantity == 0) {
                return Err(ConfigError::InvalidValue {
                    field: format!("seed.orders[{}].dishes[{}].quantity", index, line),
                    value: "0".to_string(),
                    message: "quantity must be at least 1".to_string(),
                });
            }
        }

        Ok(())
    }
}
