//! Reforge stone catalog loader.

use std::path::Path;

use reforge_core::{ReforgeStone, StoneRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Stone catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoneCatalog {
    pub stones: Vec<ReforgeStone>,
}

/// Loader for reforge stone definitions from RON files.
pub struct StoneLoader;

impl StoneLoader {
    /// Load stone definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<StoneRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse stone definitions from RON text.
    pub fn parse(content: &str) -> LoadResult<StoneRegistry> {
        let catalog: StoneCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stone catalog RON: {}", e))?;
        tracing::debug!("loaded {} reforge stones", catalog.stones.len());

        Ok(StoneRegistry::new(catalog.stones))
    }
}
