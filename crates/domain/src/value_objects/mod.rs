//! Value objects for character creation

mod abilities;
mod armor_class;
mod choice;
mod inventory;
mod progress;
mod skills;

pub use abilities::{Ability, AbilityScoreMethod, AbilityScores};
pub use armor_class::{
    calculate_armor_class, AcComponent, AcComponentKind, ArmorClassBreakdown, EquippedArmor,
    EquippedGear, EquippedShield, MEDIUM_ARMOR_DEX_CAP, SHIELD_BONUS, UNARMORED_BASE,
};
pub use choice::{Choice, ChoiceCategory, ChoiceSource, Selection};
pub use inventory::InventoryEntry;
pub use progress::DraftProgress;
pub use skills::Skill;
