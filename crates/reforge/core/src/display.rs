//! The render-time display transform.
//!
//! [`ReforgeDisplay::display`] mutates an item's display name and lore
//! just before the host shows it: stone name/lore/pricing, the reforge
//! header and description, unmet-condition hints, and the reforgable
//! suffix. [`ReforgeDisplay::revert`] undoes the name change when the
//! reforge metadata is stripped, consuming the scratch attribute written
//! by `display`.
//!
//! The transform is pure computation over the item and the injected
//! collaborators: absent metadata silently skips the dependent block, and
//! nothing is cached across calls.

use crate::attributes::AttributeKey;
use crate::conditions::{ConditionEvaluator, RequirementEvaluator};
use crate::config::DisplayConfig;
use crate::item::{ATTR_NAMESPACE, ItemStack};
use crate::placeholder::{BuiltinPlaceholders, PlaceholderContext, PlaceholderExpander};
use crate::player::PlayerView;
use crate::reforge::{ReforgeRegistry, StoneRegistry};
use crate::targets::TargetRegistry;
use crate::text::{Text, format_markup};

/// Lore lines at the bottom reserved for footer content (rarity and
/// similar) supplied by other display passes. Generated reforge lore is
/// inserted immediately above them.
const RESERVED_FOOTER_LINES: usize = 3;

const DEFAULT_CONDITIONS: &dyn ConditionEvaluator = &RequirementEvaluator;
const DEFAULT_PLACEHOLDERS: &dyn PlaceholderExpander = &BuiltinPlaceholders;

/// Render flags supplied by the host for a single display pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderProps {
    /// True when rendering inside an inventory GUI rather than a tooltip.
    pub in_gui: bool,
}

/// Collaborators consulted during one display pass.
pub struct DisplayEnv<'a> {
    pub config: &'a DisplayConfig,
    pub targets: &'a TargetRegistry,
    pub reforges: &'a ReforgeRegistry,
    pub stones: &'a StoneRegistry,
    pub conditions: &'a dyn ConditionEvaluator,
    pub placeholders: &'a dyn PlaceholderExpander,
}

impl<'a> DisplayEnv<'a> {
    /// Environment with the default requirement evaluator and builtin
    /// placeholder set.
    pub fn new(
        config: &'a DisplayConfig,
        targets: &'a TargetRegistry,
        reforges: &'a ReforgeRegistry,
        stones: &'a StoneRegistry,
    ) -> Self {
        Self {
            config,
            targets,
            reforges,
            stones,
            conditions: DEFAULT_CONDITIONS,
            placeholders: DEFAULT_PLACEHOLDERS,
        }
    }

    pub fn with_conditions(mut self, conditions: &'a dyn ConditionEvaluator) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_placeholders(mut self, placeholders: &'a dyn PlaceholderExpander) -> Self {
        self.placeholders = placeholders;
        self
    }
}

/// Applies reforge information to item names and lore at render time.
pub struct ReforgeDisplay<'a> {
    env: DisplayEnv<'a>,
}

impl<'a> ReforgeDisplay<'a> {
    pub fn new(env: DisplayEnv<'a>) -> Self {
        Self { env }
    }

    /// Format the item for one render.
    ///
    /// No-op fast path: an item no target category covers and without a
    /// stone attached is returned untouched.
    pub fn display(&self, item: &mut ItemStack, player: Option<&PlayerView>, props: RenderProps) {
        let env = &self.env;

        let targets = env.targets.for_kind(item.kind);
        let stone = item.stone_id().and_then(|id| env.stones.get(id));

        if targets.is_empty() && stone.is_none() {
            return;
        }

        let mut lore = item.lore.clone();
        let reforge = item.reforge_id().and_then(|id| env.reforges.get(id));

        if reforge.is_none() && stone.is_none() {
            if env.config.reforge.show_reforgable {
                // Suppressed entirely inside GUIs, where the suffix would
                // clutter container views.
                if props.in_gui {
                    return;
                }
                for line in &env.config.reforge.reforgable_suffix {
                    lore.push(prefixed(env.config, &format_markup(line)));
                }
            }
        }

        if let Some(stone) = stone {
            item.display_name = Text::from_markup(&stone.display.name);
            if let Some(texture) = &stone.head_texture {
                item.head_texture = Some(texture.clone());
            }

            let price = match (player, &stone.price) {
                (Some(_), Some(price)) => price.display_text(),
                _ => String::new(),
            };
            let stone_lore: Vec<String> = stone
                .display
                .lore
                .iter()
                .map(|line| line.replace("%price%", &price))
                .map(|line| prefixed(env.config, &format_markup(&line)))
                .collect();

            // Stone lore goes ahead of everything already present.
            lore.splice(0..0, stone_lore);
        }

        if let Some(reforge) = reforge {
            if env.config.reforge.display_in_lore {
                let ctx = PlaceholderContext {
                    player,
                    item: &*item,
                };

                let mut add_lore: Vec<String> = Vec::new();
                for line in &env.config.reforge.reforged_prefix {
                    let line = line.replace("%reforge%", &reforge.name);
                    add_lore.push(prefixed(env.config, &format_markup(&line)));
                }
                for line in &reforge.description {
                    let line = env.placeholders.expand(line, &ctx);
                    add_lore.push(prefixed(env.config, &format_markup(&line)));
                }

                let conditions: Vec<String> = match player {
                    Some(player) => {
                        let lines = env.conditions.not_met_lines(reforge, item, player);
                        if lines.is_empty() {
                            Vec::new()
                        } else {
                            // Blank separator line, then the hints.
                            let mut block = Vec::with_capacity(lines.len() + 1);
                            block.push(env.config.line_prefix.clone());
                            block.extend(lines.iter().map(|line| prefixed(env.config, line)));
                            block
                        }
                    }
                    None => Vec::new(),
                };

                let insertion_index = lore.len().saturating_sub(RESERVED_FOOTER_LINES);
                let add_len = add_lore.len();
                lore.splice(insertion_index..insertion_index, add_lore);
                if !conditions.is_empty() {
                    let after = insertion_index + add_len;
                    lore.splice(after..after, conditions);
                }
            }

            if env.config.reforge.display_in_name {
                let display_name = item.display_name.clone();

                // The check inspects the current name, so a re-render of
                // an already-prefixed item does not stack prefixes.
                if !display_name.to_plain().contains(&reforge.name) {
                    item.attributes.set_str(scratch_key(), display_name.to_json());
                    item.display_name =
                        Text::from_markup(&reforge.name_prefix).concat(&display_name);
                }
            }
        }

        item.lore = lore;
    }

    /// Restore the pre-display name once reforge metadata is stripped.
    pub fn revert(&self, item: &mut ItemStack) {
        if item.reforge_id().is_none() {
            return;
        }
        if !self.env.config.reforge.display_in_name {
            return;
        }

        let key = scratch_key();
        let serialized = match item.attributes.get_str(&key) {
            Some(value) => value.to_owned(),
            None => return,
        };

        // A scratch value that no longer parses is treated as absent, but
        // still consumed so the item cannot wedge mid-revert.
        if let Ok(name) = Text::from_json(&serialized) {
            item.display_name = name;
        }
        item.attributes.remove(&key);
    }
}

/// Scratch key holding the serialized pre-display name between
/// `display` and `revert`.
fn scratch_key() -> AttributeKey {
    AttributeKey::new(ATTR_NAMESPACE, "temp")
}

fn prefixed(config: &DisplayConfig, line: &str) -> String {
    format!("{}{}", config.line_prefix, line)
}
