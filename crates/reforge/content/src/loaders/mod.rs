//! Content loaders for reading display data from files.
//!
//! This module provides loaders that convert TOML/RON files into the
//! typed configuration and registries consumed by
//! [`reforge_core::DisplayEnv`].

pub mod config;
pub mod factory;
pub mod reforges;
pub mod stones;
pub mod targets;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, DisplayContent};
pub use reforges::ReforgeLoader;
pub use stones::StoneLoader;
pub use targets::TargetLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
