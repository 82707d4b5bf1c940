//! dskit Core - Shared functionality for all dskit tools
//!
//! Configuration, standard paths and the process-wide log format.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{Config, ConfigError};
pub use paths::Paths;
