//! Storefront configuration.

use gamegear_auth::AuthSettings;
use gamegear_commerce::catalog::DEFAULT_LOW_STOCK_THRESHOLD;
use gamegear_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File inside the data directory that holds persisted state.
pub const STORE_FILE_NAME: &str = "storage.json";

/// Errors raised while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog settings.
    #[serde(default)]
    pub store: StoreSection,

    /// Cart settings.
    #[serde(default)]
    pub cart: CartSection,

    /// Login settings.
    #[serde(default)]
    pub auth: AuthSection,

    /// Where persisted state lives.
    #[serde(default)]
    pub storage: StorageSection,
}

impl StorefrontConfig {
    /// Load config from a file. JSON if the name ends in `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file, in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        };

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the storefront cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.store.max_price_filter;
        if !max.is_finite() || max < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "store.max_price_filter must be a non-negative number, got {}",
                max
            )));
        }
        if self.auth.otp_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "auth.otp_ttl_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve a relative data directory against `base`, usually the
    /// directory the config file was found in.
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        if self.storage.data_dir.is_relative() {
            self.storage.data_dir = base.join(&self.storage.data_dir);
        }
        self
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// `[store]`: catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Currency every price is in.
    #[serde(default)]
    pub currency: Currency,

    /// Products with stock strictly below this count as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Upper end of the storefront price slider, in major units.
    #[serde(default = "default_max_price_filter")]
    pub max_price_filter: f64,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_max_price_filter() -> f64 {
    500.0
}

impl StoreSection {
    /// The price slider's upper bound as money.
    pub fn max_price(&self) -> Money {
        Money::from_decimal(self.max_price_filter, self.currency)
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            low_stock_threshold: default_low_stock_threshold(),
            max_price_filter: default_max_price_filter(),
        }
    }
}

/// `[cart]`: cart settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSection {
    /// Keep the cart in storage between runs.
    #[serde(default)]
    pub persist: bool,
}

/// `[auth]`: login settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSection {
    /// One-time code lifetime.
    #[serde(default = "default_otp_ttl_secs")]
    pub otp_ttl_secs: u64,

    /// Artificial delay before each login operation.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

fn default_otp_ttl_secs() -> u64 {
    gamegear_auth::DEFAULT_OTP_TTL_SECS
}

impl AuthSection {
    pub fn settings(&self) -> AuthSettings {
        AuthSettings {
            otp_ttl: Duration::from_secs(self.otp_ttl_secs),
            simulated_latency: Duration::from_millis(self.simulated_latency_ms),
        }
    }
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            otp_ttl_secs: default_otp_ttl_secs(),
            simulated_latency_ms: 0,
        }
    }
}

/// `[storage]`: persisted state location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".gamegear")
}

impl StorageSection {
    /// Path of the file store.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
