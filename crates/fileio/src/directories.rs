use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{FileIoError, Result};

/// Create each directory along with any missing parents.
///
/// Existing directories are left alone. With `verbose` set, every directory
/// is logged once it exists.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| FileIoError::write(path, e))?;
        if verbose {
            info!("created directory at: {}", path.display());
        }
    }
    Ok(())
}
