use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while materializing the skeleton
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid project name: {0:?}")]
    InvalidProjectName(String),
}
