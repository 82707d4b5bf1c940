//! dskit-fileio - File helpers for data-science projects
//!
//! Thin wrappers over serde_yaml, serde_json and rmp-serde (MessagePack).
//! Every helper logs one line on success and turns failures into a
//! [`FileIoError`] that names the path and keeps the original error as its
//! source.

pub mod binary;
pub mod directories;
pub mod error;
pub mod json;
pub mod mapping;
pub mod yaml;

#[cfg(test)]
mod testing;

pub use binary::{load_bin, save_bin};
pub use directories::create_directories;
pub use error::{ErrorKind, FileIoError, Result};
pub use json::{load_json, save_json, NonFiniteNumber};
pub use mapping::Mapping;
pub use yaml::read_yaml;
