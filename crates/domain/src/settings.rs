//! Creation settings
//!
//! Tunables for ability score ranges, point-buy budget and the equipment
//! validation policy. Hosts either deserialize these from their own config
//! layer or read them from `HEROFORGE_*` environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CreationError;

pub const ENV_ABILITY_SCORE_MIN: &str = "HEROFORGE_ABILITY_SCORE_MIN";
pub const ENV_ABILITY_SCORE_MAX: &str = "HEROFORGE_ABILITY_SCORE_MAX";
pub const ENV_POINT_BUY_BUDGET: &str = "HEROFORGE_POINT_BUY_BUDGET";
pub const ENV_EQUIPMENT_VALIDATION: &str = "HEROFORGE_EQUIPMENT_VALIDATION";

/// When unknown equipment options and items are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentValidation {
    /// Checked on every setter; unknown options are validation errors.
    #[default]
    Eager,
    /// Only resolved at finalize; unknown options fail compilation.
    Deferred,
}

impl fmt::Display for EquipmentValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentValidation::Eager => write!(f, "eager"),
            EquipmentValidation::Deferred => write!(f, "deferred"),
        }
    }
}

impl FromStr for EquipmentValidation {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" | "setter" => Ok(EquipmentValidation::Eager),
            "deferred" | "lazy" | "finalize" => Ok(EquipmentValidation::Deferred),
            other => Err(CreationError::config(format!(
                "unknown equipment validation policy: {other}"
            ))),
        }
    }
}

fn default_ability_score_min() -> u8 {
    3
}
fn default_ability_score_max() -> u8 {
    20
}
fn default_point_buy_budget() -> u8 {
    27
}
fn default_starting_level() -> u8 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationSettings {
    /// Lowest accepted base ability score
    #[serde(default = "default_ability_score_min")]
    pub ability_score_min: u8,
    /// Highest accepted base ability score, before racial increases
    #[serde(default = "default_ability_score_max")]
    pub ability_score_max: u8,
    #[serde(default = "default_point_buy_budget")]
    pub point_buy_budget: u8,
    #[serde(default = "default_starting_level")]
    pub starting_level: u8,
    #[serde(default)]
    pub equipment_validation: EquipmentValidation,
}

impl Default for CreationSettings {
    fn default() -> Self {
        Self {
            ability_score_min: default_ability_score_min(),
            ability_score_max: default_ability_score_max(),
            point_buy_budget: default_point_buy_budget(),
            starting_level: default_starting_level(),
            equipment_validation: EquipmentValidation::default(),
        }
    }
}

impl CreationSettings {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, CreationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CreationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let settings = Self {
            ability_score_min: parse_or(&lookup, ENV_ABILITY_SCORE_MIN, defaults.ability_score_min)?,
            ability_score_max: parse_or(&lookup, ENV_ABILITY_SCORE_MAX, defaults.ability_score_max)?,
            point_buy_budget: parse_or(&lookup, ENV_POINT_BUY_BUDGET, defaults.point_buy_budget)?,
            starting_level: defaults.starting_level,
            equipment_validation: match lookup(ENV_EQUIPMENT_VALIDATION) {
                Some(raw) => raw.parse()?,
                None => defaults.equipment_validation,
            },
        };

        if settings.ability_score_min > settings.ability_score_max {
            return Err(CreationError::config(format!(
                "{ENV_ABILITY_SCORE_MIN} ({}) exceeds {ENV_ABILITY_SCORE_MAX} ({})",
                settings.ability_score_min, settings.ability_score_max
            )));
        }

        tracing::debug!(
            ability_score_min = settings.ability_score_min,
            ability_score_max = settings.ability_score_max,
            point_buy_budget = settings.point_buy_budget,
            equipment_validation = %settings.equipment_validation,
            "Loaded creation settings"
        );
        Ok(settings)
    }

    pub fn with_equipment_validation(mut self, policy: EquipmentValidation) -> Self {
        self.equipment_validation = policy;
        self
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u8) -> Result<u8, CreationError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CreationError::config(format!("{key} must be a number, got {raw:?}"))),
        None => Ok(default),
    }
}
