//! Aggregates the “business logic” layer.

pub mod classify;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use classify::{Classification, classify, parse_integer};
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_BINS, DEFAULT_BLOCK, DEFAULT_WIDTH};
pub use data::{read_lines, read_lines_from_path, title_for_path};
pub use error::{ConfigError, HistoError};
