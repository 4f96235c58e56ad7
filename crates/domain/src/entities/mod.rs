//! Ruleset content records
//!
//! Read-only descriptions of races, classes, backgrounds, items and
//! requirements as the ruleset collaborator supplies them.

mod background;
mod class;
mod grants;
mod item;
mod race;
mod requirement;

pub use background::BackgroundData;
pub use class::{ClassData, ResourceData, SpellcastingData, SubclassData};
pub use grants::{AutomaticGrants, GrantSource, SpellGrant};
pub use item::{
    ArmorCategory, ArmorProficiency, ItemData, ItemFilter, ItemGrant, ItemKind, WeaponCategory,
};
pub use race::{RaceData, Size, SubraceData};
pub use requirement::{
    CategoryPick, EquipmentOption, Requirement, RequirementKind, Requirements, RequirementsKey,
};
