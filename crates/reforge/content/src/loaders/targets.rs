//! Target category loader.

use std::path::Path;

use reforge_core::{ReforgeTarget, TargetRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Target catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetCatalog {
    pub targets: Vec<ReforgeTarget>,
}

/// Loader for target categories from RON files.
pub struct TargetLoader;

impl TargetLoader {
    /// Load target categories from a RON file.
    pub fn load(path: &Path) -> LoadResult<TargetRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse target categories from RON text.
    pub fn parse(content: &str) -> LoadResult<TargetRegistry> {
        let catalog: TargetCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse target catalog RON: {}", e))?;
        tracing::debug!("loaded {} target categories", catalog.targets.len());

        Ok(TargetRegistry::new(catalog.targets))
    }
}
