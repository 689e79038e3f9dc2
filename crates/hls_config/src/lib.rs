//! Parsing and validation of `sched.toml` project configuration files.
//!
//! Reads project defaults (solver binary path, default latency, default
//! area-cost/resource-count vector, output directory) so the CLI can be
//! invoked without repeating them on every run.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
