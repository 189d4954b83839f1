//! TOML configuration: reducer timing, view bounds, and the product catalog.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ReducerConfig, ViewConfig};
