//! D&D 5th Edition calculation engine.

use super::traits::{CalculationEngine, ProficiencyLevel};

/// 5e SRD arithmetic. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dnd5eSystem;

impl Dnd5eSystem {
    pub fn new() -> Self {
        Self
    }
}

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        // D&D uses floor division, Rust's / rounds toward zero
        let diff = score - 10;
        if diff >= 0 {
            diff / 2
        } else {
            (diff - 1) / 2
        }
    }

    fn proficiency_bonus(&self, level: u8) -> i32 {
        ((level.max(1) as i32 - 1) / 4) + 2
    }

    fn skill_modifier(
        &self,
        ability_score: i32,
        level: u8,
        proficiency: ProficiencyLevel,
    ) -> i32 {
        let modifier = self.ability_modifier(ability_score);
        let prof = self.proficiency_bonus(level);

        let prof_bonus = match proficiency {
            ProficiencyLevel::None => 0,
            ProficiencyLevel::Half => prof / 2,
            ProficiencyLevel::Proficient => prof,
            ProficiencyLevel::Expert => prof * 2,
        };

        modifier + prof_bonus
    }

    fn first_level_hit_points(&self, hit_die: u8, constitution_modifier: i32) -> i32 {
        i32::from(hit_die) + constitution_modifier
    }
}
