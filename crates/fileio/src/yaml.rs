//! YAML documents

use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{FileIoError, Result};
use crate::mapping::{Mapping, Rejected};

/// Read a YAML file into a [`Mapping`].
///
/// A document with no content (blank, comments only, `null`, `{}`) is
/// [`FileIoError::EmptyContent`]. Anything else that goes wrong, including a
/// top level that is not a mapping, is [`FileIoError::Read`]. `<<` merge keys
/// are resolved.
pub fn read_yaml(path: impl AsRef<Path>) -> Result<Mapping> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|e| FileIoError::read(path, e))?;
    if has_no_content(&text) {
        return Err(FileIoError::empty(path));
    }

    let mut value: Value =
        serde_yaml::from_str(&text).map_err(|e| FileIoError::read(path, e))?;
    value.apply_merge().map_err(|e| FileIoError::read(path, e))?;
    let mapping = match Mapping::try_from_value(value) {
        Ok(mapping) => mapping,
        Err(Rejected::Empty) => return Err(FileIoError::empty(path)),
        Err(rejected) => return Err(FileIoError::read(path, rejected)),
    };

    info!("yaml file: {} loaded successfully", path.display());
    Ok(mapping)
}

/// Blank lines, comments and document markers only
fn has_no_content(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
