//! Game system rules used during character creation.
//!
//! `dnd5e` provides the SRD arithmetic; `traits` defines the calculation and
//! ruleset-content seams.

mod dnd5e;
mod traits;

pub use dnd5e::Dnd5eSystem;

#[cfg(test)]
pub use traits::MockRulesetContent;
pub use traits::{CalculationEngine, ProficiencyLevel, RestType, RulesetContent};
