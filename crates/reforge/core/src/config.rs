//! Display configuration.
//!
//! Every configuration key the display transform consumes appears here as
//! a typed field, so missing-key behavior is the `Default` impl rather
//! than a scattered string lookup. Field names keep the kebab-case
//! spellings of the shipped configuration files.

use serde::{Deserialize, Serialize};

/// Typed view of the display configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DisplayConfig {
    /// Prepended to every generated lore line for visual grouping.
    pub line_prefix: String,
    pub reforge: ReforgeDisplayConfig,
}

/// The `[reforge]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReforgeDisplayConfig {
    /// Append the reforgable suffix to items no reforge is applied to yet.
    pub show_reforgable: bool,
    /// Markup template lines for the reforgable suffix block.
    pub reforgable_suffix: Vec<String>,
    /// Insert the reforge header and description into the lore.
    pub display_in_lore: bool,
    /// Markup template lines for the lore header; `%reforge%` is
    /// substituted with the reforge name.
    pub reforged_prefix: Vec<String>,
    /// Prepend the reforge's name prefix to the item display name.
    pub display_in_name: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            line_prefix: "§r".into(),
            reforge: ReforgeDisplayConfig::default(),
        }
    }
}

impl Default for ReforgeDisplayConfig {
    fn default() -> Self {
        Self {
            show_reforgable: true,
            reforgable_suffix: vec!["&8⚒ Reforgable".into()],
            display_in_lore: true,
            reforged_prefix: vec!["&8[&6%reforge%&8]".into()],
            display_in_name: true,
        }
    }
}
