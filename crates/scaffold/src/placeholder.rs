//! Minimal content for newly created files
//!
//! Chosen by exact file name first, then by extension. Anything unrecognised
//! is created empty.

use serde::Serialize;
use std::path::Path;

use crate::variables::Variables;

const DOCKERFILE: &str = "\
FROM python:3.11-slim
WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
CMD [\"python\", \"app.py\"]
";

const REQUIREMENTS: &str = "\
# Add project dependencies here
# Example:
# numpy
# pandas
";

const SETUP_SCRIPT: &str = "\
from setuptools import setup, find_packages

setup(
    name=\"{{NAME}}\",
    version='0.0.1',
    packages=find_packages(where='src'),
    package_dir={'': 'src'},
)
";

const APP_ENTRY: &str = "\
def main():
    print('App is running...')

if __name__ == '__main__':
    main()
";

const YAML: &str = "# YAML config\n";

const HTML: &str = "\
<!doctype html>
<html>
<head><meta charset='utf-8'><title>App</title></head>
<body><h1>Hello</h1></body>
</html>
";

/// Content kind for a manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placeholder {
    Dockerfile,
    Requirements,
    SetupScript,
    AppEntry,
    Yaml,
    Html,
    Empty,
}

impl Placeholder {
    pub fn for_path(path: &Path) -> Self {
        match path.file_name().and_then(|n| n.to_str()) {
            Some("Dockerfile") => return Self::Dockerfile,
            Some("requirements.txt") => return Self::Requirements,
            Some("setup.py") => return Self::SetupScript,
            Some("app.py") => return Self::AppEntry,
            _ => {}
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") => Self::Yaml,
            Some("html") => Self::Html,
            _ => Self::Empty,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dockerfile => "dockerfile",
            Self::Requirements => "requirements",
            Self::SetupScript => "setup-script",
            Self::AppEntry => "app-entry",
            Self::Yaml => "yaml",
            Self::Html => "html",
            Self::Empty => "empty",
        }
    }

    /// File body with variables substituted
    pub fn render(&self, vars: &Variables) -> String {
        match self {
            Self::Dockerfile => DOCKERFILE.to_string(),
            Self::Requirements => REQUIREMENTS.to_string(),
            Self::SetupScript => vars.substitute(SETUP_SCRIPT),
            Self::AppEntry => APP_ENTRY.to_string(),
            Self::Yaml => YAML.to_string(),
            Self::Html => HTML.to_string(),
            Self::Empty => String::new(),
        }
    }
}
