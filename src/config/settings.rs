use serde::Deserialize;
use std::fs;

use super::paths::Paths;
use crate::error::Result;

/// On-disk configuration, a fallback for the CIRCLE_* environment variables.
///
/// This tool never writes the file; it only reads whatever the operator put
/// there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// API-related configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// CircleCI API token
    pub token: Option<String>,

    /// CircleCI API host
    pub host: Option<String>,
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}
