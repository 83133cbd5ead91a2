//! Display configuration loader.

use std::path::Path;

use reforge_core::DisplayConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for display configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load display configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing DisplayConfig
    ///
    /// # Returns
    ///
    /// Returns a DisplayConfig.
    pub fn load(path: &Path) -> LoadResult<DisplayConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse display configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<DisplayConfig> {
        let config: DisplayConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse display config TOML: {}", e))?;

        Ok(config)
    }
}
