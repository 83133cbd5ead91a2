//! Placeholder expansion for description templates.

use crate::item::ItemStack;
use crate::player::PlayerView;

/// Everything a placeholder can draw on during one render.
pub struct PlaceholderContext<'a> {
    pub player: Option<&'a PlayerView>,
    pub item: &'a ItemStack,
}

/// Expands `%placeholder%` tokens in a template line.
///
/// `%reforge%` and `%price%` are substituted by the display transform
/// itself before this runs; implementations handle everything else.
pub trait PlaceholderExpander {
    fn expand(&self, template: &str, ctx: &PlaceholderContext<'_>) -> String;
}

/// Expands the placeholders every description can rely on: `%player%`
/// (viewer name, left untouched for anonymous renders) and `%item%`
/// (item kind name).
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinPlaceholders;

impl PlaceholderExpander for BuiltinPlaceholders {
    fn expand(&self, template: &str, ctx: &PlaceholderContext<'_>) -> String {
        let mut line = template.replace("%item%", &ctx.item.kind.to_string());
        if let Some(player) = ctx.player {
            line = line.replace("%player%", &player.name);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use crate::text::Text;

    #[test]
    fn expands_item_and_player() {
        let item = ItemStack::new(ItemKind::Pickaxe, Text::plain("Pick"));
        let player = PlayerView::new("alex", 12);
        let ctx = PlaceholderContext {
            player: Some(&player),
            item: &item,
        };

        assert_eq!(
            BuiltinPlaceholders.expand("%player%'s %item%", &ctx),
            "alex's pickaxe"
        );
    }

    #[test]
    fn player_token_survives_anonymous_renders() {
        let item = ItemStack::new(ItemKind::Bow, Text::plain("Bow"));
        let ctx = PlaceholderContext {
            player: None,
            item: &item,
        };

        assert_eq!(
            BuiltinPlaceholders.expand("%player% draws %item%", &ctx),
            "%player% draws bow"
        );
    }
}
