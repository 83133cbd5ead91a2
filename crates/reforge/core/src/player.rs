//! Viewer-side data consulted during rendering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Snapshot of the player an item is being rendered for.
///
/// Absent for anonymous renders (item previews, web map tooltips), in
/// which case price and condition blocks are skipped entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl PlayerView {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            permissions: HashSet::new(),
        }
    }

    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    pub fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }
}
