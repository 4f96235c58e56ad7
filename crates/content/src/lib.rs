//! SRD content for the character creation pipeline.
//!
//! [`SrdRuleset`] implements [`heroforge_domain::RulesetContent`] over static
//! tables of races, classes, backgrounds and equipment, plus the first-level
//! decision points each of them imposes.

mod backgrounds;
mod classes;
mod items;
mod races;
mod requirements;
mod ruleset;

pub use ruleset::SrdRuleset;
