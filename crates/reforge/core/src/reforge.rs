//! Reforge and reforge stone definitions.
//!
//! Definitions are immutable data loaded once from catalogs; items refer
//! to them by id through their attribute container. A dangling id (the
//! definition was removed from the catalog) resolves to `None` and the
//! display transform treats it exactly like absent metadata.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::conditions::Requirement;

/// An enchantment-like modifier applied to an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reforge {
    pub id: String,
    /// Plain display name, also used for the already-prefixed check.
    pub name: String,
    /// Lore description template lines; placeholder-expanded per render.
    #[serde(default)]
    pub description: Vec<String>,
    /// Markup fragment prepended to the item name when `display-in-name`
    /// is on.
    #[serde(default)]
    pub name_prefix: String,
    /// Ids of the target categories this reforge can roll on.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Requirements a player must meet for the reforge to be active.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// Display templates scoped under one stone's configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoneDisplay {
    /// Markup template for the stone's display name.
    pub name: String,
    /// Lore template lines; `%price%` is substituted per render.
    #[serde(default)]
    pub lore: Vec<String>,
}

/// Purchase price shown in a stone's lore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StonePrice {
    pub amount: f64,
    /// Template containing `%amount%`, e.g. `"&6$%amount%"`.
    pub display: String,
}

impl StonePrice {
    /// Render the configured display template with the formatted amount.
    pub fn display_text(&self) -> String {
        self.display.replace("%amount%", &format_amount(self.amount))
    }
}

/// A consumable that grants a pending reforge when attached to an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReforgeStone {
    pub id: String,
    pub display: StoneDisplay,
    #[serde(default)]
    pub price: Option<StonePrice>,
    /// Base64 profile texture when the stone renders as a player head.
    #[serde(default)]
    pub head_texture: Option<String>,
}

/// Id-keyed lookup of reforge definitions.
#[derive(Clone, Debug, Default)]
pub struct ReforgeRegistry {
    by_id: HashMap<String, Reforge>,
}

impl ReforgeRegistry {
    pub fn new(reforges: impl IntoIterator<Item = Reforge>) -> Self {
        Self {
            by_id: reforges
                .into_iter()
                .map(|reforge| (reforge.id.clone(), reforge))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Reforge> {
        self.by_id.get(id)
    }

    /// Reforges that can roll on the given target category, in id order.
    pub fn for_target(&self, target_id: &str) -> Vec<&Reforge> {
        let mut matching: Vec<&Reforge> = self
            .by_id
            .values()
            .filter(|reforge| reforge.targets.iter().any(|t| t == target_id))
            .collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        matching
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reforge> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Id-keyed lookup of reforge stone definitions.
#[derive(Clone, Debug, Default)]
pub struct StoneRegistry {
    by_id: HashMap<String, ReforgeStone>,
}

impl StoneRegistry {
    pub fn new(stones: impl IntoIterator<Item = ReforgeStone>) -> Self {
        Self {
            by_id: stones
                .into_iter()
                .map(|stone| (stone.id.clone(), stone))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ReforgeStone> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Format a price amount with thousands separators, keeping cents only
/// when they are non-zero.
fn format_amount(amount: f64) -> String {
    let whole = amount.trunc() as u64;
    let cents = ((amount - amount.trunc()) * 100.0).round() as u64;
    let (whole, cents) = if cents >= 100 {
        (whole + 1, 0)
    } else {
        (whole, cents)
    };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if cents > 0 {
        format!("{grouped}.{cents:02}")
    } else {
        grouped
    }
}
