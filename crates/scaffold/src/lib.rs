//! scaffold - Project skeleton for data-science repositories
//!
//! Materializes a fixed manifest of source, infra, config and misc files.
//! Missing files get minimal placeholder content chosen by name or extension;
//! files that already exist are never touched, so a second run is a no-op.

pub mod error;
pub mod manifest;
pub mod placeholder;
pub mod scaffolder;
pub mod variables;

pub use error::ScaffoldError;
pub use manifest::{validate_project_name, Category, Entry, Manifest, DEFAULT_PROJECT_NAME};
pub use placeholder::Placeholder;
pub use scaffolder::{PlannedFile, ScaffoldReport, Scaffolder};
pub use variables::Variables;
