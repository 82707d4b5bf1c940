//! Template variable handling
//!
//! Manifest paths and placeholder bodies use `{{PLACEHOLDER}}` syntax.
//! Unknown placeholders are left untouched.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Z_][A-Z0-9_]*)\}\}").unwrap())
}

/// Template variables container
#[derive(Debug, Clone)]
pub struct Variables {
    /// Variable name -> value mapping
    vars: HashMap<String, String>,
}

impl Variables {
    /// Create a container with `NAME` set to the project name
    pub fn new(project_name: &str) -> Self {
        let mut vars = HashMap::new();
        vars.insert("NAME".to_string(), project_name.to_string());
        Self { vars }
    }

    /// Replace all {{PLACEHOLDER}} patterns in a string
    pub fn substitute(&self, content: &str) -> String {
        placeholder_re()
            .replace_all(content, |caps: &regex::Captures| {
                let key = &caps[1];
                self.vars
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", key))
            })
            .to_string()
    }

    /// Find all variables used in a string
    pub fn find_used_variables(content: &str) -> Vec<String> {
        let mut vars: Vec<String> = placeholder_re()
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect();

        vars.sort();
        vars.dedup();
        vars
    }
}
