//! Render-time reforge display logic and the data types it runs over.
//!
//! `reforge-core` defines the item/reforge value types and exposes the
//! pure display transform ([`display::ReforgeDisplay`]) that rewrites an
//! item's name and lore before the host renders it. Configuration and
//! definition catalogs are loaded by `reforge-content`; collaborators the
//! host may want to replace (condition evaluation, placeholder expansion)
//! sit behind traits on [`display::DisplayEnv`].
pub mod attributes;
pub mod conditions;
pub mod config;
pub mod display;
pub mod item;
pub mod placeholder;
pub mod player;
pub mod reforge;
pub mod targets;
pub mod text;
pub use attributes::{AttributeContainer, AttributeKey, AttributeValue};
pub use conditions::{ConditionEvaluator, Requirement, RequirementCheck, RequirementEvaluator};
pub use config::{DisplayConfig, ReforgeDisplayConfig};
pub use display::{DisplayEnv, ReforgeDisplay, RenderProps};
pub use item::{ATTR_NAMESPACE, ItemKind, ItemStack};
pub use placeholder::{BuiltinPlaceholders, PlaceholderContext, PlaceholderExpander};
pub use player::PlayerView;
pub use reforge::{
    Reforge, ReforgeRegistry, ReforgeStone, StoneDisplay, StonePrice, StoneRegistry,
};
pub use targets::{ReforgeTarget, TargetRegistry};
pub use text::{Span, Text, TextColor, TextError, format_markup};
