use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_products, Catalog, Product};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reducer: ReducerConfig,
    #[serde(default)]
    pub view: ViewConfig,
    /// Catalog in display order. Defaults to the built-in five products.
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
}

/// View model behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerConfig {
    /// Delay before `ProductsLoaded` is emitted after `Initialize` (default: 500).
    /// Zero is allowed; emission stays asynchronous.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    /// Emit a `ViewUpdated` after `Reset` (default: true).
    #[serde(default = "default_emit_on_reset")]
    pub emit_on_reset: bool,
}

/// Constraints the view applies to gestures before they reach the view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Stepper upper bound (default: 100).
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
}

fn default_load_delay_ms() -> u64 {
    500
}

fn default_emit_on_reset() -> bool {
    true
}

fn default_max_quantity() -> u32 {
    100
}

impl ReducerConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Config {
    /// Build the immutable catalog described by this config.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.products.clone())
    }
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
            emit_on_reset: default_emit_on_reset(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_quantity: default_max_quantity(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reducer: ReducerConfig::default(),
            view: ViewConfig::default(),
            products: default_products(),
        }
    }
}
