//! The fixed list of files a data-science project starts with
//!
//! Paths are grouped into four categories and always materialized in the
//! order source, infra, config, other. `{{NAME}}` is the project package name.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::variables::Variables;

/// Project name used when nothing else is configured
pub const DEFAULT_PROJECT_NAME: &str = "datascience";

const SOURCE_FILES: &[&str] = &[
    "src/{{NAME}}/__init__.py",
    "src/{{NAME}}/components/__init__.py",
    "src/{{NAME}}/utils/__init__.py",
    "src/{{NAME}}/utils/common.py",
    "src/{{NAME}}/config/__init__.py",
    "src/{{NAME}}/config/configuration.py",
    "src/{{NAME}}/pipeline/__init__.py",
    "src/{{NAME}}/entity/__init__.py",
    "src/{{NAME}}/entity/config_entity.py",
    "src/{{NAME}}/constants/__init__.py",
    "main.py",
    "app.py",
];

const INFRA_FILES: &[&str] = &["requirements.txt", "Dockerfile", "setup.py"];

const CONFIG_FILES: &[&str] = &["config/config.yaml", "params.yaml", "schema.yaml"];

const OTHER_FILES: &[&str] = &[
    ".github/workflows/.gitkeep",
    "research/research.ipynb",
    "templates/index.html",
];

/// Manifest section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Source,
    Infra,
    Config,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Source,
        Category::Infra,
        Category::Config,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Infra => "infra",
            Self::Config => "config",
            Self::Other => "other",
        }
    }

    fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Source => SOURCE_FILES,
            Self::Infra => INFRA_FILES,
            Self::Config => CONFIG_FILES,
            Self::Other => OTHER_FILES,
        }
    }
}

/// One manifest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub category: Category,
    pub path: PathBuf,
}

/// Resolved manifest for one project name
#[derive(Debug, Clone)]
pub struct Manifest {
    project_name: String,
    entries: Vec<Entry>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }
}

impl Manifest {
    pub fn new(project_name: &str) -> Self {
        let vars = Variables::new(project_name);

        let entries = Category::ALL
            .iter()
            .flat_map(|category| {
                let vars = &vars;
                category.templates().iter().map(move |template| Entry {
                    category: *category,
                    path: PathBuf::from(vars.substitute(template)),
                })
            })
            .collect();

        Self {
            project_name: project_name.to_string(),
            entries,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Every path, in materialization order
    pub fn files(&self) -> Vec<&Path> {
        self.entries.iter().map(|e| e.path.as_path()).collect()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(move |e| e.category == category)
            .map(|e| e.path.as_path())
    }
}

/// A project name must be a single, non-empty path component
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    let ok = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_whitespace);

    if ok {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidProjectName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_order() {
        let manifest = Manifest::default();
        let files: Vec<_> = manifest.files().iter().map(|p| p.to_string_lossy().into_owned()).collect();

        assert_eq!(files.len(), 21);
        assert_eq!(files[0], "src/datascience/__init__.py");
        assert_eq!(files[11], "app.py");
        assert_eq!(&files[12..15], &["requirements.txt", "Dockerfile", "setup.py"]);
        assert_eq!(&files[15..18], &["config/config.yaml", "params.yaml", "schema.yaml"]);
        assert_eq!(files[20], "templates/index.html");
    }

    #[test]
    fn test_categories_partition_manifest() {
        let manifest = Manifest::default();
        let total: usize = Category::ALL
            .iter()
            .map(|c| manifest.in_category(*c).count())
            .sum();

        assert_eq!(total, manifest.entries().len());
        assert_eq!(manifest.in_category(Category::Infra).count(), 3);
        assert_eq!(manifest.in_category(Category::Other).count(), 3);
    }

    #[test]
    fn test_project_name_resolved() {
        let manifest = Manifest::new("churn");
        assert_eq!(manifest.project_name(), "churn");

        for entry in manifest.entries() {
            let path = entry.path.to_string_lossy();
            assert!(Variables::find_used_variables(&path).is_empty(), "{path}");
        }
        assert!(manifest
            .in_category(Category::Source)
            .any(|p| p == Path::new("src/churn/utils/common.py")));
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("datascience").is_ok());
        assert!(validate_project_name("ml_project-2").is_ok());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("..").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("has space").is_err());
    }
}
