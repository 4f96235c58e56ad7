//! Draft progress bitmask

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Tracks which creation steps a draft has completed.
    ///
    /// Callers use the named predicates instead of testing bits directly.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct DraftProgress: u16 {
        const NAME = 1 << 0;
        const RACE = 1 << 1;
        const CLASS = 1 << 2;
        const BACKGROUND = 1 << 3;
        const ABILITY_SCORES = 1 << 4;
        const SKILLS = 1 << 5;
        const LANGUAGES = 1 << 6;
        const EQUIPMENT = 1 << 7;
        const SPELLS = 1 << 8;

        /// Steps that must be set before compilation can be attempted.
        const REQUIRED = Self::NAME.bits()
            | Self::RACE.bits()
            | Self::CLASS.bits()
            | Self::BACKGROUND.bits()
            | Self::ABILITY_SCORES.bits();
    }
}

impl DraftProgress {
    #[inline]
    pub fn has_name(&self) -> bool {
        self.contains(Self::NAME)
    }

    #[inline]
    pub fn has_race(&self) -> bool {
        self.contains(Self::RACE)
    }

    #[inline]
    pub fn has_class(&self) -> bool {
        self.contains(Self::CLASS)
    }

    #[inline]
    pub fn has_background(&self) -> bool {
        self.contains(Self::BACKGROUND)
    }

    #[inline]
    pub fn has_ability_scores(&self) -> bool {
        self.contains(Self::ABILITY_SCORES)
    }

    #[inline]
    pub fn has_skills(&self) -> bool {
        self.contains(Self::SKILLS)
    }

    #[inline]
    pub fn has_languages(&self) -> bool {
        self.contains(Self::LANGUAGES)
    }

    #[inline]
    pub fn has_equipment(&self) -> bool {
        self.contains(Self::EQUIPMENT)
    }

    #[inline]
    pub fn has_spells(&self) -> bool {
        self.contains(Self::SPELLS)
    }

    /// All mandatory steps are set. Says nothing about requirement choices.
    pub fn is_complete(&self) -> bool {
        self.contains(Self::REQUIRED)
    }

    /// Mandatory steps still outstanding.
    pub fn missing(&self) -> DraftProgress {
        Self::REQUIRED.difference(*self)
    }
}
