//! Character creation core: Draft -> Validation -> Compilation.
//!
//! A host drives a [`Draft`] through its step setters, each of which returns a
//! [`ValidationResult`]. Once `can_finalize` holds, [`Draft::finalize`] runs
//! the compiler and yields an immutable [`Character`]. Ruleset content comes
//! in through the [`RulesetContent`] trait.

pub mod aggregates;
pub mod compiler;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod settings;
pub mod validation;
pub mod value_objects;

#[cfg(test)]
mod test_support;

pub use aggregates::{
    Character, CharacterSpells, CharacterState, ClassResource, Draft, DraftState, HitDice,
    HitPoints, SpellSlot,
};
pub use entities::{
    ArmorCategory, ArmorProficiency, AutomaticGrants, BackgroundData, CategoryPick, ClassData,
    EquipmentOption, GrantSource, ItemData, ItemFilter, ItemGrant, ItemKind, RaceData,
    Requirement, RequirementKind, Requirements, RequirementsKey, ResourceData, Size,
    SpellGrant, SpellcastingData, SubclassData, SubraceData, WeaponCategory,
};
pub use error::CreationError;
pub use game_systems::{CalculationEngine, Dnd5eSystem, ProficiencyLevel, RestType, RulesetContent};
pub use ids::{
    BackgroundId, CharacterId, ClassId, DraftId, FightingStyleId, ItemId, LanguageId, OptionId,
    PlayerId, ProficiencyId, RaceId, RequirementId, ResourceId, SpellId, SubclassId, SubraceId,
    ToolId, TraitId,
};
pub use settings::{CreationSettings, EquipmentValidation};
pub use validation::{IssueCode, Severity, ValidationIssue, ValidationResult, Validator};
pub use value_objects::{
    calculate_armor_class, Ability, AbilityScoreMethod, AbilityScores, AcComponent,
    AcComponentKind, ArmorClassBreakdown, Choice, ChoiceCategory, ChoiceSource, DraftProgress,
    EquippedArmor, EquippedGear, EquippedShield, InventoryEntry, Selection, Skill,
};
