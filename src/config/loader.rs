use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::ProductId;
use crate::config::types::Config;

/// Why a cartbind config file was not accepted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read cartbind config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in cartbind config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog is empty: configure at least one [[products]] entry")]
    EmptyCatalog,

    #[error("catalog lists product id {id} twice ('{first}' and '{second}')")]
    DuplicateProductId {
        id: ProductId,
        first: String,
        second: String,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cartbind/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cartbind").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks the catalog: non-empty, no product id listed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.products.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut names: HashMap<ProductId, &str> = HashMap::new();
        for product in &self.products {
            if let Some(first) = names.insert(product.id, &product.name) {
                return Err(ConfigError::DuplicateProductId {
                    id: product.id,
                    first: first.to_string(),
                    second: product.name.clone(),
                });
            }
        }

        Ok(())
    }
}
