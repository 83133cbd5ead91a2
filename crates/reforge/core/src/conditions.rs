//! Reforge requirements and the unmet-condition lines shown in lore.
//!
//! Each requirement declares its own not-met lines, so catalogs control
//! the wording. The evaluator seam lets a host plug in richer condition
//! systems without touching the display transform.

use serde::{Deserialize, Serialize};

use crate::item::ItemStack;
use crate::player::PlayerView;
use crate::reforge::Reforge;
use crate::text::format_markup;

/// A single check a player must pass for a reforge to be active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementCheck {
    MinLevel(u32),
    Permission(String),
}

/// A requirement plus the lore lines shown while it is unmet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub check: RequirementCheck,
    #[serde(default)]
    pub not_met_lines: Vec<String>,
}

impl Requirement {
    pub fn new(check: RequirementCheck, not_met_lines: Vec<String>) -> Self {
        Self {
            check,
            not_met_lines,
        }
    }

    pub fn is_met(&self, player: &PlayerView) -> bool {
        match &self.check {
            RequirementCheck::MinLevel(level) => player.level >= *level,
            RequirementCheck::Permission(node) => player.has_permission(node),
        }
    }
}

/// Produces the human-readable lines describing why a reforge is not
/// currently usable by a player. Lines are returned fully formatted but
/// unprefixed; the display transform applies the lore prefix.
pub trait ConditionEvaluator {
    fn not_met_lines(
        &self,
        reforge: &Reforge,
        item: &ItemStack,
        player: &PlayerView,
    ) -> Vec<String>;
}

/// Evaluates the requirements declared on the reforge itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequirementEvaluator;

impl ConditionEvaluator for RequirementEvaluator {
    fn not_met_lines(
        &self,
        reforge: &Reforge,
        _item: &ItemStack,
        player: &PlayerView,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        for requirement in &reforge.requirements {
            if !requirement.is_met(player) {
                lines.extend(requirement.not_met_lines.iter().map(|line| format_markup(line)));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use crate::text::Text;

    fn create_test_reforge() -> Reforge {
        Reforge {
            id: "withered".into(),
            name: "Withered".into(),
            description: Vec::new(),
            name_prefix: String::new(),
            targets: Vec::new(),
            requirements: vec![
                Requirement::new(
                    RequirementCheck::MinLevel(30),
                    vec!["&cRequires level 30".into()],
                ),
                Requirement::new(
                    RequirementCheck::Permission("reforges.use.withered".into()),
                    vec!["&cMissing permission".into()],
                ),
            ],
        }
    }

    #[test]
    fn qualified_player_has_no_unmet_lines() {
        let reforge = create_test_reforge();
        let item = ItemStack::new(ItemKind::Sword, Text::plain("Sword"));
        let player = PlayerView::new("steve", 40).with_permission("reforges.use.withered");

        let lines = RequirementEvaluator.not_met_lines(&reforge, &item, &player);
        assert!(lines.is_empty());
    }

    #[test]
    fn unmet_lines_are_formatted_in_declaration_order() {
        let reforge = create_test_reforge();
        let item = ItemStack::new(ItemKind::Sword, Text::plain("Sword"));
        let player = PlayerView::new("steve", 10);

        let lines = RequirementEvaluator.not_met_lines(&reforge, &item, &player);
        assert_eq!(lines, vec!["§cRequires level 30", "§cMissing permission"]);
    }

    #[test]
    fn only_failing_requirements_contribute() {
        let reforge = create_test_reforge();
        let item = ItemStack::new(ItemKind::Sword, Text::plain("Sword"));
        let player = PlayerView::new("steve", 35);

        let lines = RequirementEvaluator.not_met_lines(&reforge, &item, &player);
        assert_eq!(lines, vec!["§cMissing permission"]);
    }
}
