//! Aggregates: the mutable `Draft` and the immutable `Character` it compiles to.

mod character;
mod draft;

pub use character::{
    Character, CharacterSpells, CharacterState, ClassResource, HitDice, HitPoints, SpellSlot,
};
pub use draft::{step_keys, Draft, DraftState};
