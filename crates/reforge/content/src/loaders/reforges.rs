//! Reforge catalog loader.

use std::path::Path;

use reforge_core::{Reforge, ReforgeRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Reforge catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReforgeCatalog {
    pub reforges: Vec<Reforge>,
}

/// Loader for reforge definitions from RON files.
pub struct ReforgeLoader;

impl ReforgeLoader {
    /// Load reforge definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ReforgeCatalog
    ///
    /// # Returns
    ///
    /// Returns a ReforgeRegistry.
    pub fn load(path: &Path) -> LoadResult<ReforgeRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse reforge definitions from RON text.
    pub fn parse(content: &str) -> LoadResult<ReforgeRegistry> {
        let catalog: ReforgeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reforge catalog RON: {}", e))?;
        tracing::debug!("loaded {} reforges", catalog.reforges.len());

        Ok(ReforgeRegistry::new(catalog.reforges))
    }
}
