//! Reforge target categories.
//!
//! A target is a named group of item kinds ("melee", "tools", ...) that
//! reforges roll on. An item is reforgable exactly when at least one
//! target category covers its kind.

use serde::{Deserialize, Serialize};

use crate::item::ItemKind;

/// Named category of item kinds a reforge can apply to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReforgeTarget {
    pub id: String,
    pub kinds: Vec<ItemKind>,
}

impl ReforgeTarget {
    pub fn new(id: impl Into<String>, kinds: Vec<ItemKind>) -> Self {
        Self {
            id: id.into(),
            kinds,
        }
    }

    pub fn includes(&self, kind: ItemKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Lookup of target categories, preserving declaration order.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    targets: Vec<ReforgeTarget>,
}

impl TargetRegistry {
    pub fn new(targets: Vec<ReforgeTarget>) -> Self {
        Self { targets }
    }

    /// All categories covering the given item kind.
    pub fn for_kind(&self, kind: ItemKind) -> Vec<&ReforgeTarget> {
        self.targets
            .iter()
            .filter(|target| target.includes(kind))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&ReforgeTarget> {
        self.targets.iter().find(|target| target.id == id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
