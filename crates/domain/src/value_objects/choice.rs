//! Choice model
//!
//! A `Choice` is one recorded player decision: who offered it (`source`),
//! which requirement it answers (`requirement_id`) and what was picked. The
//! category is never stored separately; it is derived from the selection
//! variant so a payload can never disagree with its category.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::abilities::{Ability, AbilityScoreMethod, AbilityScores};
use super::skills::Skill;
use crate::ids::{
    BackgroundId, ClassId, FightingStyleId, ItemId, LanguageId, OptionId, RaceId, RequirementId,
    SpellId, SubclassId, SubraceId, ToolId, TraitId,
};

/// Who granted the opportunity to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceSource {
    Race,
    Subrace,
    Class,
    Subclass,
    Background,
    /// Decisions made directly by the player (name, core identity, scores)
    Player,
}

impl fmt::Display for ChoiceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceSource::Race => write!(f, "race"),
            ChoiceSource::Subrace => write!(f, "subrace"),
            ChoiceSource::Class => write!(f, "class"),
            ChoiceSource::Subclass => write!(f, "subclass"),
            ChoiceSource::Background => write!(f, "background"),
            ChoiceSource::Player => write!(f, "player"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceCategory {
    Name,
    Race,
    Class,
    Background,
    AbilityScores,
    Skills,
    Expertise,
    Languages,
    Tools,
    Equipment,
    AbilityIncreases,
    Cantrips,
    Spells,
    FightingStyle,
    Traits,
}

impl ChoiceCategory {
    /// Core identity steps are recorded by their own setters, never passed in
    /// as sub-choices.
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            ChoiceCategory::Name
                | ChoiceCategory::Race
                | ChoiceCategory::Class
                | ChoiceCategory::Background
                | ChoiceCategory::AbilityScores
        )
    }

    /// Equipment may hold several choices per source, keyed by requirement.
    pub fn is_keyed_by_requirement(&self) -> bool {
        matches!(self, ChoiceCategory::Equipment)
    }
}

impl fmt::Display for ChoiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChoiceCategory::Name => "name",
            ChoiceCategory::Race => "race",
            ChoiceCategory::Class => "class",
            ChoiceCategory::Background => "background",
            ChoiceCategory::AbilityScores => "ability_scores",
            ChoiceCategory::Skills => "skills",
            ChoiceCategory::Expertise => "expertise",
            ChoiceCategory::Languages => "languages",
            ChoiceCategory::Tools => "tools",
            ChoiceCategory::Equipment => "equipment",
            ChoiceCategory::AbilityIncreases => "ability_increases",
            ChoiceCategory::Cantrips => "cantrips",
            ChoiceCategory::Spells => "spells",
            ChoiceCategory::FightingStyle => "fighting_style",
            ChoiceCategory::Traits => "traits",
        };
        f.write_str(name)
    }
}

/// What was picked. One variant per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "value", rename_all = "snake_case")]
pub enum Selection {
    Name(String),
    Race {
        race: RaceId,
        subrace: Option<SubraceId>,
    },
    Class {
        class: ClassId,
        subclass: Option<SubclassId>,
    },
    Background(BackgroundId),
    AbilityScores {
        scores: AbilityScores,
        method: AbilityScoreMethod,
    },
    Skills(Vec<Skill>),
    Expertise(Vec<Skill>),
    Languages(Vec<LanguageId>),
    Tools(Vec<ToolId>),
    /// An equipment option plus the concrete items picked for any
    /// "choose a weapon of this kind" slots inside it.
    Equipment {
        option: OptionId,
        #[serde(default)]
        items: Vec<ItemId>,
    },
    AbilityIncreases(BTreeMap<Ability, i8>),
    Cantrips(Vec<SpellId>),
    Spells {
        level: u8,
        spells: Vec<SpellId>,
    },
    FightingStyle(FightingStyleId),
    Traits(Vec<TraitId>),
}

impl Selection {
    pub fn category(&self) -> ChoiceCategory {
        match self {
            Selection::Name(_) => ChoiceCategory::Name,
            Selection::Race { .. } => ChoiceCategory::Race,
            Selection::Class { .. } => ChoiceCategory::Class,
            Selection::Background(_) => ChoiceCategory::Background,
            Selection::AbilityScores { .. } => ChoiceCategory::AbilityScores,
            Selection::Skills(_) => ChoiceCategory::Skills,
            Selection::Expertise(_) => ChoiceCategory::Expertise,
            Selection::Languages(_) => ChoiceCategory::Languages,
            Selection::Tools(_) => ChoiceCategory::Tools,
            Selection::Equipment { .. } => ChoiceCategory::Equipment,
            Selection::AbilityIncreases(_) => ChoiceCategory::AbilityIncreases,
            Selection::Cantrips(_) => ChoiceCategory::Cantrips,
            Selection::Spells { .. } => ChoiceCategory::Spells,
            Selection::FightingStyle(_) => ChoiceCategory::FightingStyle,
            Selection::Traits(_) => ChoiceCategory::Traits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub source: ChoiceSource,
    pub requirement_id: RequirementId,
    pub selection: Selection,
}

impl Choice {
    pub fn new(
        source: ChoiceSource,
        requirement_id: impl Into<RequirementId>,
        selection: Selection,
    ) -> Self {
        Self {
            source,
            requirement_id: requirement_id.into(),
            selection,
        }
    }

    pub fn skills(
        source: ChoiceSource,
        requirement_id: impl Into<RequirementId>,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Self {
        Self::new(
            source,
            requirement_id,
            Selection::Skills(skills.into_iter().collect()),
        )
    }

    pub fn languages<L: Into<LanguageId>>(
        source: ChoiceSource,
        requirement_id: impl Into<RequirementId>,
        languages: impl IntoIterator<Item = L>,
    ) -> Self {
        Self::new(
            source,
            requirement_id,
            Selection::Languages(languages.into_iter().map(Into::into).collect()),
        )
    }

    pub fn equipment(
        source: ChoiceSource,
        requirement_id: impl Into<RequirementId>,
        option: impl Into<OptionId>,
    ) -> Self {
        Self::new(
            source,
            requirement_id,
            Selection::Equipment {
                option: option.into(),
                items: Vec::new(),
            },
        )
    }

    /// Equipment choice whose option includes "pick any X" slots.
    pub fn equipment_with_items<I: Into<ItemId>>(
        source: ChoiceSource,
        requirement_id: impl Into<RequirementId>,
        option: impl Into<OptionId>,
        items: impl IntoIterator<Item = I>,
    ) -> Self {
        Self::new(
            source,
            requirement_id,
            Selection::Equipment {
                option: option.into(),
                items: items.into_iter().map(Into::into).collect(),
            },
        )
    }

    #[inline]
    pub fn category(&self) -> ChoiceCategory {
        self.selection.category()
    }

    /// True when `other` should be replaced by this choice on record.
    pub fn supersedes(&self, other: &Choice) -> bool {
        let category = self.category();
        if category != other.category() || self.source != other.source {
            return false;
        }
        if category.is_keyed_by_requirement() {
            self.requirement_id == other.requirement_id
        } else {
            true
        }
    }
}
