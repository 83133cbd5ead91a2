//! Content factory for building the display environment from data files.

use std::path::{Path, PathBuf};

use reforge_core::{DisplayConfig, DisplayEnv, ReforgeRegistry, StoneRegistry, TargetRegistry};

use crate::loaders::{ConfigLoader, LoadResult, ReforgeLoader, StoneLoader, TargetLoader};

/// Everything a display pass needs, loaded from one content directory.
#[derive(Debug, Clone)]
pub struct DisplayContent {
    pub config: DisplayConfig,
    pub targets: TargetRegistry,
    pub reforges: ReforgeRegistry,
    pub stones: StoneRegistry,
}

impl DisplayContent {
    /// Borrow a display environment with the default collaborators.
    pub fn env(&self) -> DisplayEnv<'_> {
        DisplayEnv::new(&self.config, &self.targets, &self.reforges, &self.stones)
    }
}

/// Content factory that loads all display content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── display.toml
/// ├── targets.ron
/// ├── reforges.ron
/// └── stones.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load display configuration from `display.toml`.
    pub fn load_config(&self) -> LoadResult<DisplayConfig> {
        let path = self.data_dir.join("display.toml");
        ConfigLoader::load(&path)
    }

    /// Load target categories from `targets.ron`.
    pub fn load_targets(&self) -> LoadResult<TargetRegistry> {
        let path = self.data_dir.join("targets.ron");
        TargetLoader::load(&path)
    }

    /// Load reforge definitions from `reforges.ron`.
    pub fn load_reforges(&self) -> LoadResult<ReforgeRegistry> {
        let path = self.data_dir.join("reforges.ron");
        ReforgeLoader::load(&path)
    }

    /// Load stone definitions from `stones.ron`.
    pub fn load_stones(&self) -> LoadResult<StoneRegistry> {
        let path = self.data_dir.join("stones.ron");
        StoneLoader::load(&path)
    }

    /// Load the full content bundle, cross-checking target references.
    pub fn load_all(&self) -> LoadResult<DisplayContent> {
        let config = self.load_config()?;
        let targets = self.load_targets()?;
        let reforges = self.load_reforges()?;
        let stones = self.load_stones()?;

        for reforge in reforges.iter() {
            for target in &reforge.targets {
                if targets.get(target).is_none() {
                    tracing::warn!(
                        "reforge '{}' names unknown target '{}'",
                        reforge.id,
                        target
                    );
                }
            }
        }

        tracing::info!(
            "loaded display content: {} targets, {} reforges, {} stones",
            targets.len(),
            reforges.len(),
            stones.len()
        );

        Ok(DisplayContent {
            config,
            targets,
            reforges,
            stones,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_points_at_its_data_dir() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn load_all_reports_missing_files() {
        let factory = ContentFactory::new("/nonexistent");
        assert!(factory.load_all().is_err());
    }
}
