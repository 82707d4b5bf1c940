//! Idempotent materialization of the project skeleton
//!
//! Each path gets its parent directories and, if the file is not already there,
//! placeholder content. Existing files are never touched, so running the
//! scaffolder again after a successful run changes nothing.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::ScaffoldError;
use crate::placeholder::Placeholder;
use crate::variables::Variables;

/// What a successful run did, with paths relative to the root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    pub skipped_files: Vec<PathBuf>,
}

impl ScaffoldReport {
    /// True when the skeleton was already complete
    pub fn is_noop(&self) -> bool {
        self.created_dirs.is_empty() && self.created_files.is_empty()
    }
}

/// Dry-run view of one manifest path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub placeholder: Placeholder,
    pub exists: bool,
}

/// Writes manifest files below a root directory
pub struct Scaffolder {
    root: PathBuf,
    vars: Variables,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>, project_name: &str) -> Self {
        Self {
            root: root.into(),
            vars: Variables::new(project_name),
        }
    }

    /// Report what `scaffold` would do without touching the disk
    pub fn plan<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<PlannedFile> {
        paths
            .iter()
            .map(|rel| {
                let rel = rel.as_ref();
                PlannedFile {
                    path: rel.to_path_buf(),
                    placeholder: Placeholder::for_path(rel),
                    exists: self.root.join(rel).exists(),
                }
            })
            .collect()
    }

    /// Materialize every path in order.
    ///
    /// Stops at the first filesystem error. Files created before the failure
    /// are kept.
    pub fn scaffold<P: AsRef<Path>>(&self, paths: &[P]) -> Result<ScaffoldReport, ScaffoldError> {
        let mut report = ScaffoldReport::default();

        for rel in paths {
            self.materialize(rel.as_ref(), &mut report)
                .inspect_err(|e| error!("File system error occurred: {}", e))?;
        }

        Ok(report)
    }

    fn materialize(&self, rel: &Path, report: &mut ScaffoldReport) -> Result<(), ScaffoldError> {
        if let Some(rel_dir) = rel.parent().filter(|d| !d.as_os_str().is_empty()) {
            let dir = self.root.join(rel_dir);
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(|source| ScaffoldError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
                info!("Created directory: {}", rel_dir.display());
                report.created_dirs.push(rel_dir.to_path_buf());
            }
        }

        let path = self.root.join(rel);
        if path.exists() {
            skip(rel, report);
            return Ok(());
        }

        let content = Placeholder::for_path(rel).render(&self.vars);
        let write_err = |source: io::Error| ScaffoldError::WriteFile {
            path: path.clone(),
            source,
        };

        // create_new: whatever shows up after the exists() check is left alone
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                skip(rel, report);
                return Ok(());
            }
            Err(e) => return Err(write_err(e)),
        };
        file.write_all(content.as_bytes()).map_err(write_err)?;

        info!("Created file: {}", rel.display());
        report.created_files.push(rel.to_path_buf());
        Ok(())
    }
}

fn skip(rel: &Path, report: &mut ScaffoldReport) {
    let name = rel.file_name().unwrap_or(rel.as_os_str());
    info!("{} already exists", name.to_string_lossy());
    report.skipped_files.push(rel.to_path_buf());
}
