//! Armor class calculation
//!
//! A pure function of equipped gear, ability scores and an optional
//! unarmored-defense ability. The result keeps one entry per contributing
//! source so a sheet can show where each point came from.

use serde::{Deserialize, Serialize};

use super::abilities::{Ability, AbilityScores};
use crate::entities::ArmorCategory;
use crate::ids::ItemId;

/// Unarmored base AC
pub const UNARMORED_BASE: i32 = 10;
/// Flat bonus from any shield
pub const SHIELD_BONUS: i32 = 2;
/// Dexterity cap while wearing medium armor
pub const MEDIUM_ARMOR_DEX_CAP: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedArmor {
    pub item: ItemId,
    pub name: String,
    pub category: ArmorCategory,
    pub base_ac: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedShield {
    pub item: ItemId,
    pub name: String,
}

/// What is worn at the moment AC is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedGear {
    pub armor: Option<EquippedArmor>,
    pub shield: Option<EquippedShield>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcComponentKind {
    Base,
    Armor,
    Ability,
    Shield,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcComponent {
    pub kind: AcComponentKind,
    /// Human-readable origin ("unarmored", "Chain Mail", "dexterity")
    pub source: String,
    pub value: i32,
}

impl AcComponent {
    fn new(kind: AcComponentKind, source: impl Into<String>, value: i32) -> Self {
        Self {
            kind,
            source: source.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClassBreakdown {
    components: Vec<AcComponent>,
    total: i32,
}

impl ArmorClassBreakdown {
    fn from_components(components: Vec<AcComponent>) -> Self {
        let total = components.iter().map(|c| c.value).sum();
        Self { components, total }
    }

    #[inline]
    pub fn total(&self) -> i32 {
        self.total
    }

    #[inline]
    pub fn components(&self) -> &[AcComponent] {
        &self.components
    }

    pub fn component(&self, kind: AcComponentKind) -> Option<&AcComponent> {
        self.components.iter().find(|c| c.kind == kind)
    }
}

/// Derive AC from gear and abilities.
///
/// Components come out in a fixed order: base or armor, ability modifiers,
/// shield. Ability entries with a zero value are left out.
pub fn calculate_armor_class(
    gear: &EquippedGear,
    scores: &AbilityScores,
    unarmored_defense: Option<Ability>,
) -> ArmorClassBreakdown {
    let dex = scores.modifier(Ability::Dexterity);
    let mut components = Vec::with_capacity(4);

    match &gear.armor {
        None => {
            components.push(AcComponent::new(
                AcComponentKind::Base,
                "unarmored",
                UNARMORED_BASE,
            ));
            push_ability(&mut components, Ability::Dexterity, dex);
            if let Some(ability) = unarmored_defense {
                push_ability(&mut components, ability, scores.modifier(ability));
            }
        }
        Some(armor) => {
            components.push(AcComponent::new(
                AcComponentKind::Armor,
                armor.name.clone(),
                i32::from(armor.base_ac),
            ));
            match armor.category {
                ArmorCategory::Light => push_ability(&mut components, Ability::Dexterity, dex),
                ArmorCategory::Medium => push_ability(
                    &mut components,
                    Ability::Dexterity,
                    dex.min(MEDIUM_ARMOR_DEX_CAP),
                ),
                ArmorCategory::Heavy => {}
            }
        }
    }

    if let Some(shield) = &gear.shield {
        components.push(AcComponent::new(
            AcComponentKind::Shield,
            shield.name.clone(),
            SHIELD_BONUS,
        ));
    }

    ArmorClassBreakdown::from_components(components)
}

fn push_ability(components: &mut Vec<AcComponent>, ability: Ability, value: i32) {
    if value != 0 {
        components.push(AcComponent::new(
            AcComponentKind::Ability,
            ability.to_string(),
            value,
        ));
    }
}
