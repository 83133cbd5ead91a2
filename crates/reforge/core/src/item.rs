//! Item snapshot types.
//!
//! [`ItemStack`] is the explicit value type standing in for the host's
//! mutable item object: display name, ordered lore lines, the attribute
//! container, and head-icon metadata. The display transform borrows one
//! exclusively for the duration of a call and leaves it render-ready.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::attributes::{AttributeContainer, AttributeKey};
use crate::text::Text;

/// Namespace for every attribute key owned by this crate.
pub const ATTR_NAMESPACE: &str = "reforge";

/// Equipment kinds that target categories group into.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ItemKind {
    Sword,
    Axe,
    Pickaxe,
    Shovel,
    Hoe,
    Bow,
    Crossbow,
    Trident,
    FishingRod,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Shield,
    Elytra,
    /// Anything no target category covers.
    Other,
}

/// Snapshot of one item as handed over by the host for a render pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub display_name: Text,
    /// Ordered lore lines, already in rendered (`§`-coded) form.
    pub lore: Vec<String>,
    pub attributes: AttributeContainer,
    /// Base64 profile texture of a player-head icon, if the item has one.
    pub head_texture: Option<String>,
}

impl ItemStack {
    pub fn new(kind: ItemKind, display_name: Text) -> Self {
        Self {
            kind,
            display_name,
            lore: Vec::new(),
            attributes: AttributeContainer::new(),
            head_texture: None,
        }
    }

    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    /// Id of the reforge applied to this item, if any.
    pub fn reforge_id(&self) -> Option<&str> {
        self.attributes.get_str(&reforge_key())
    }

    pub fn set_reforge_id(&mut self, id: impl Into<String>) {
        self.attributes.set_str(reforge_key(), id);
    }

    /// Id of the reforge stone attached to this item, if any.
    pub fn stone_id(&self) -> Option<&str> {
        self.attributes.get_str(&stone_key())
    }

    pub fn set_stone_id(&mut self, id: impl Into<String>) {
        self.attributes.set_str(stone_key(), id);
    }
}

/// Key under which the applied reforge id is stored.
pub fn reforge_key() -> AttributeKey {
    AttributeKey::new(ATTR_NAMESPACE, "reforge")
}

/// Key under which the attached reforge stone id is stored.
pub fn stone_key() -> AttributeKey {
    AttributeKey::new(ATTR_NAMESPACE, "stone")
}
