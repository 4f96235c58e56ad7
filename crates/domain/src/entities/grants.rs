//! Automatic grants
//!
//! Everything a race, class, subclass or background hands out without the
//! player choosing it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::{ArmorProficiency, ItemGrant};
use crate::ids::{
    BackgroundId, ClassId, LanguageId, ProficiencyId, RaceId, SpellId, SubclassId, SubraceId,
    ToolId, TraitId,
};
use crate::value_objects::{ChoiceSource, Skill};

/// A spell granted outright, e.g. a domain spell or a racial cantrip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellGrant {
    pub spell: SpellId,
    /// 0 for cantrips
    pub level: u8,
}

impl SpellGrant {
    pub fn cantrip(spell: impl Into<SpellId>) -> Self {
        Self {
            spell: spell.into(),
            level: 0,
        }
    }

    pub fn leveled(spell: impl Into<SpellId>, level: u8) -> Self {
        Self {
            spell: spell.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomaticGrants {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<LanguageId>,
    #[serde(default)]
    pub armor: Vec<ArmorProficiency>,
    #[serde(default)]
    pub weapons: Vec<ProficiencyId>,
    #[serde(default)]
    pub tools: Vec<ToolId>,
    #[serde(default)]
    pub equipment: Vec<ItemGrant>,
    #[serde(default)]
    pub spells: Vec<SpellGrant>,
    #[serde(default)]
    pub traits: Vec<TraitId>,
}

impl AutomaticGrants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills.extend(skills);
        self
    }

    pub fn with_languages<L: Into<LanguageId>>(
        mut self,
        languages: impl IntoIterator<Item = L>,
    ) -> Self {
        self.languages.extend(languages.into_iter().map(Into::into));
        self
    }

    pub fn with_armor(mut self, armor: impl IntoIterator<Item = ArmorProficiency>) -> Self {
        self.armor.extend(armor);
        self
    }

    pub fn with_weapons<P: Into<ProficiencyId>>(
        mut self,
        weapons: impl IntoIterator<Item = P>,
    ) -> Self {
        self.weapons.extend(weapons.into_iter().map(Into::into));
        self
    }

    pub fn with_tools<T: Into<ToolId>>(mut self, tools: impl IntoIterator<Item = T>) -> Self {
        self.tools.extend(tools.into_iter().map(Into::into));
        self
    }

    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = ItemGrant>) -> Self {
        self.equipment.extend(equipment);
        self
    }

    pub fn with_spells(mut self, spells: impl IntoIterator<Item = SpellGrant>) -> Self {
        self.spells.extend(spells);
        self
    }

    pub fn with_traits<T: Into<TraitId>>(mut self, traits: impl IntoIterator<Item = T>) -> Self {
        self.traits.extend(traits.into_iter().map(Into::into));
        self
    }

    pub fn grants_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    pub fn grants_language(&self, language: &LanguageId) -> bool {
        self.languages.contains(language)
    }
}

/// Which content record a set of automatic grants comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantSource {
    Race(RaceId),
    Subrace(RaceId, SubraceId),
    Class(ClassId),
    Subclass(ClassId, SubclassId),
    Background(BackgroundId),
}

impl GrantSource {
    pub fn choice_source(&self) -> ChoiceSource {
        match self {
            GrantSource::Race(_) => ChoiceSource::Race,
            GrantSource::Subrace(..) => ChoiceSource::Subrace,
            GrantSource::Class(_) => ChoiceSource::Class,
            GrantSource::Subclass(..) => ChoiceSource::Subclass,
            GrantSource::Background(_) => ChoiceSource::Background,
        }
    }
}

impl fmt::Display for GrantSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantSource::Race(race) => write!(f, "race {race}"),
            GrantSource::Subrace(_, subrace) => write!(f, "subrace {subrace}"),
            GrantSource::Class(class) => write!(f, "class {class}"),
            GrantSource::Subclass(_, subclass) => write!(f, "subclass {subclass}"),
            GrantSource::Background(background) => write!(f, "background {background}"),
        }
    }
}
