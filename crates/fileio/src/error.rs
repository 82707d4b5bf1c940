//! Error taxonomy for file I/O helpers
//!
//! `FileIoError` is the root; its three variants are siblings. Read and write
//! failures always carry the underlying cause, reachable through
//! [`std::error::Error::source`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed underlying cause
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, FileIoError>;

/// File I/O errors
#[derive(Error, Debug)]
pub enum FileIoError {
    /// The document parsed but holds no usable content
    #[error("file is empty: {}", path.display())]
    EmptyContent { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Cause,
    },
}

/// Discriminant of [`FileIoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyContent,
    Read,
    Write,
}

impl FileIoError {
    pub(crate) fn empty(path: &Path) -> Self {
        Self::EmptyContent {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn read(path: &Path, source: impl Into<Cause>) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: &Path, source: impl Into<Cause>) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyContent { .. } => ErrorKind::EmptyContent,
            Self::Read { .. } => ErrorKind::Read,
            Self::Write { .. } => ErrorKind::Write,
        }
    }

    /// Path the failing operation was working on
    pub fn path(&self) -> &Path {
        match self {
            Self::EmptyContent { path } | Self::Read { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }

    /// Downcast the wrapped cause to a concrete error type
    pub fn cause<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::EmptyContent { .. } => None,
            Self::Read { source, .. } | Self::Write { source, .. } => source.downcast_ref::<E>(),
        }
    }
}
