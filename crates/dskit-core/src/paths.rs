//! Standard paths used by dskit tools

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "DSKIT_CONFIG";

/// Standard dskit paths
pub struct Paths {
    /// Config directory (~/.config/dskit)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("dskit");

        Self { config }
    }

    /// Location of the config file, honouring DSKIT_CONFIG
    pub fn config_file(&self) -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.join("config.json"))
    }
}
