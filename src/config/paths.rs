use std::path::PathBuf;

use crate::error::Result;

/// Locations for Overture configuration
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root configuration directory (~/.overture)
    pub root: PathBuf,
    /// Configuration file path (~/.overture/config.toml)
    pub config_file: PathBuf,
}

impl Paths {
    /// Create a new Paths instance using the user's home directory
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")?;
        let root = PathBuf::from(home).join(".overture");

        Ok(Self {
            config_file: root.join("config.toml"),
            root,
        })
    }

    /// Check if the config file exists
    pub fn config_exists(&self) -> bool {
        self.config_file.exists()
    }
}
