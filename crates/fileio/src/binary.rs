//! Opaque binary snapshots of in-memory values
//!
//! The format is MessagePack with struct fields written by name. It is
//! self-describing, so dynamic values (`serde_json::Value`, [`Mapping`]),
//! untagged enums and `#[serde(flatten)]` structs load back as well as plain
//! types do.
//!
//! [`Mapping`]: crate::Mapping

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::{FileIoError, Result};

pub fn save_bin<T: Serialize + ?Sized>(data: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| FileIoError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    rmp_serde::encode::write_named(&mut writer, data).map_err(|e| FileIoError::write(path, e))?;
    writer.flush().map_err(|e| FileIoError::write(path, e))?;

    info!("binary file saved at: {}", path.display());
    Ok(())
}

pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| FileIoError::read(path, e))?;
    let data = rmp_serde::decode::from_read(BufReader::new(file))
        .map_err(|e| FileIoError::read(path, e))?;

    info!("binary file loaded from: {}", path.display());
    Ok(data)
}
