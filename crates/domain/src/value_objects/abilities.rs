//! Ability scores
//!
//! The six core abilities, a complete score assignment and the method the
//! player used to generate it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CreationError;
use crate::game_systems::{CalculationEngine, Dnd5eSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        };
        f.write_str(name)
    }
}

impl FromStr for Ability {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "strength" => Ok(Ability::Strength),
            "dex" | "dexterity" => Ok(Ability::Dexterity),
            "con" | "constitution" => Ok(Ability::Constitution),
            "int" | "intelligence" => Ok(Ability::Intelligence),
            "wis" | "wisdom" => Ok(Ability::Wisdom),
            "cha" | "charisma" => Ok(Ability::Charisma),
            other => Err(CreationError::invalid_input(format!("unknown ability: {other}"))),
        }
    }
}

/// How the base scores were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityScoreMethod {
    /// 15, 14, 13, 12, 10, 8 assigned in any order
    Standard,
    PointBuy,
    Rolled,
    #[default]
    Manual,
}

impl AbilityScoreMethod {
    pub const STANDARD_ARRAY: [u8; 6] = [15, 14, 13, 12, 10, 8];

    /// Point-buy cost of a single score, `None` outside 8..=15.
    pub fn point_buy_cost(score: u8) -> Option<u8> {
        match score {
            8..=13 => Some(score - 8),
            14 => Some(7),
            15 => Some(9),
            _ => None,
        }
    }
}

impl fmt::Display for AbilityScoreMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbilityScoreMethod::Standard => write!(f, "standard"),
            AbilityScoreMethod::PointBuy => write!(f, "point_buy"),
            AbilityScoreMethod::Rolled => write!(f, "rolled"),
            AbilityScoreMethod::Manual => write!(f, "manual"),
        }
    }
}

/// A full assignment of the six abilities.
///
/// Values are not clamped: racial increases may push a score above 20 during
/// creation and that is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl AbilityScores {
    pub fn new(
        strength: u8,
        dexterity: u8,
        constitution: u8,
        intelligence: u8,
        wisdom: u8,
        charisma: u8,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn uniform(score: u8) -> Self {
        Self::new(score, score, score, score, score, score)
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: u8) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    pub fn with(mut self, ability: Ability, score: u8) -> Self {
        self.set(ability, score);
        self
    }

    /// Add a signed delta, saturating at the bounds of `u8`.
    pub fn apply_increase(&mut self, ability: Ability, delta: i8) {
        let raised = i16::from(self.get(ability)) + i16::from(delta);
        self.set(ability, raised.clamp(0, i16::from(u8::MAX)) as u8);
    }

    pub fn apply_increases(&mut self, increases: &BTreeMap<Ability, i8>) {
        for (ability, delta) in increases {
            self.apply_increase(*ability, *delta);
        }
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        Dnd5eSystem::new().ability_modifier(i32::from(self.get(ability)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        Ability::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}
