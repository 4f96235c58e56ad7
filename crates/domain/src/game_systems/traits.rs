//! Game system traits for character creation.
//!
//! `CalculationEngine` holds the arithmetic a rules edition defines.
//! `RulesetContent` is the boundary to the static content tables the host
//! supplies: races, classes, backgrounds, requirements and the item catalog.

use serde::{Deserialize, Serialize};

use crate::entities::{
    AutomaticGrants, BackgroundData, ClassData, GrantSource, ItemData, RaceData, Requirements,
    RequirementsKey,
};
use crate::ids::{BackgroundId, ClassId, ItemId, RaceId};

/// Calculation rules that vary per game system.
pub trait CalculationEngine: Send + Sync {
    /// Calculate ability modifier from score.
    ///
    /// For D&D-like systems: floor((score - 10) / 2)
    fn ability_modifier(&self, score: i32) -> i32;

    /// Calculate proficiency bonus from character level.
    ///
    /// For D&D 5e: ((level - 1) / 4) + 2
    fn proficiency_bonus(&self, level: u8) -> i32;

    /// Skill or save modifier: ability modifier plus the proficiency share.
    fn skill_modifier(&self, ability_score: i32, level: u8, proficiency: ProficiencyLevel)
        -> i32;

    /// Passive Wisdom (Perception).
    fn passive_perception(
        &self,
        wisdom_score: i32,
        level: u8,
        proficiency: ProficiencyLevel,
    ) -> i32 {
        10 + self.skill_modifier(wisdom_score, level, proficiency)
    }

    /// Hit points at first level: the full hit die plus the Constitution modifier.
    fn first_level_hit_points(&self, hit_die: u8, constitution_modifier: i32) -> i32;
}

/// Proficiency level for skills and saves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    /// Not proficient
    #[default]
    None,
    /// Half proficiency (Jack of All Trades, etc.)
    Half,
    /// Standard proficiency
    Proficient,
    /// Expertise (double proficiency)
    Expert,
}

/// Rest type for resource recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestType {
    /// Short rest (typically 1 hour)
    Short,
    /// Long rest (typically 8 hours)
    Long,
}

/// Read-only access to ruleset content.
///
/// Implementations are treated as immutable for the lifetime of a creation
/// session. Lookups return owned records so callers never alias content.
#[cfg_attr(test, mockall::automock)]
pub trait RulesetContent: Send + Sync {
    fn race(&self, id: &RaceId) -> Option<RaceData>;

    fn class(&self, id: &ClassId) -> Option<ClassData>;

    fn background(&self, id: &BackgroundId) -> Option<BackgroundData>;

    /// Decision points for a race, class (at a level) or background.
    fn requirements(&self, key: &RequirementsKey) -> Requirements;

    /// Everything the source grants without a player choice.
    ///
    /// The default reads the `grants` block of the matching content record.
    fn automatic_grants(&self, source: &GrantSource) -> AutomaticGrants {
        let grants = match source {
            GrantSource::Race(race) => self.race(race).map(|r| r.grants),
            GrantSource::Subrace(race, subrace) => self
                .race(race)
                .and_then(|r| r.subrace(subrace).map(|s| s.grants.clone())),
            GrantSource::Class(class) => self.class(class).map(|c| c.grants),
            GrantSource::Subclass(class, subclass) => self
                .class(class)
                .and_then(|c| c.subclass(subclass).map(|s| s.grants.clone())),
            GrantSource::Background(background) => self.background(background).map(|b| b.grants),
        };
        grants.unwrap_or_default()
    }

    /// Equipment catalog lookup, including packs.
    fn item(&self, id: &ItemId) -> Option<ItemData>;
}
