//! Requirements catalog types
//!
//! A `Requirement` describes one decision point a race, class, subclass or
//! background imposes at a given level. The ruleset supplies them; the
//! validator and compiler only read them.

use serde::{Deserialize, Serialize};

use super::item::{ItemFilter, ItemGrant};
use crate::ids::{
    BackgroundId, ClassId, FightingStyleId, LanguageId, OptionId, RaceId, RequirementId, SpellId,
    SubclassId, SubraceId, ToolId, TraitId,
};
use crate::value_objects::{Ability, ChoiceCategory, ChoiceSource, Skill};

/// One "choose N of these" slot inside an equipment option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPick {
    pub filter: ItemFilter,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentOption {
    pub id: OptionId,
    pub label: String,
    /// Fixed items this option grants
    pub items: Vec<ItemGrant>,
    /// Open slots the player fills with concrete items
    #[serde(default)]
    pub picks: Vec<CategoryPick>,
}

impl EquipmentOption {
    pub fn new(
        id: impl Into<OptionId>,
        label: impl Into<String>,
        items: impl IntoIterator<Item = ItemGrant>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items: items.into_iter().collect(),
            picks: Vec::new(),
        }
    }

    /// An option made only of open slots, e.g. "two martial weapons".
    pub fn pick(
        id: impl Into<OptionId>,
        label: impl Into<String>,
        filter: ItemFilter,
        count: u8,
    ) -> Self {
        Self::new(id, label, Vec::<ItemGrant>::new()).with_pick(filter, count)
    }

    pub fn with_pick(mut self, filter: ItemFilter, count: u8) -> Self {
        self.picks.push(CategoryPick { filter, count });
        self
    }

    /// Total number of items the player must name for the open slots.
    pub fn pick_count(&self) -> usize {
        self.picks.iter().map(|p| usize::from(p.count)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementKind {
    /// `options: None` accepts any skill
    Skills {
        count: u8,
        options: Option<Vec<Skill>>,
    },
    /// `options: None` accepts any language
    Languages {
        count: u8,
        options: Option<Vec<LanguageId>>,
    },
    Tools {
        count: u8,
        options: Vec<ToolId>,
    },
    Expertise {
        count: u8,
    },
    FightingStyle {
        options: Vec<FightingStyleId>,
    },
    /// Pick exactly one option
    Equipment {
        options: Vec<EquipmentOption>,
    },
    Cantrips {
        count: u8,
        options: Vec<SpellId>,
    },
    Spells {
        level: u8,
        count: u8,
        options: Vec<SpellId>,
    },
    AbilityIncreases {
        points: u8,
        max_per_ability: u8,
        #[serde(default)]
        excluded: Vec<Ability>,
    },
    Traits {
        count: u8,
        options: Vec<TraitId>,
    },
    /// Satisfied by the draft's subclass field rather than a recorded choice
    Subclass {
        options: Vec<SubclassId>,
    },
}

impl RequirementKind {
    /// Category of the choice that answers this requirement, if any.
    pub fn category(&self) -> Option<ChoiceCategory> {
        match self {
            RequirementKind::Skills { .. } => Some(ChoiceCategory::Skills),
            RequirementKind::Languages { .. } => Some(ChoiceCategory::Languages),
            RequirementKind::Tools { .. } => Some(ChoiceCategory::Tools),
            RequirementKind::Expertise { .. } => Some(ChoiceCategory::Expertise),
            RequirementKind::FightingStyle { .. } => Some(ChoiceCategory::FightingStyle),
            RequirementKind::Equipment { .. } => Some(ChoiceCategory::Equipment),
            RequirementKind::Cantrips { .. } => Some(ChoiceCategory::Cantrips),
            RequirementKind::Spells { .. } => Some(ChoiceCategory::Spells),
            RequirementKind::AbilityIncreases { .. } => Some(ChoiceCategory::AbilityIncreases),
            RequirementKind::Traits { .. } => Some(ChoiceCategory::Traits),
            RequirementKind::Subclass { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: RequirementId,
    pub label: String,
    /// The source a matching choice must carry
    pub source: ChoiceSource,
    pub kind: RequirementKind,
    #[serde(default)]
    pub optional: bool,
}

impl Requirement {
    pub fn new(
        id: impl Into<RequirementId>,
        label: impl Into<String>,
        source: ChoiceSource,
        kind: RequirementKind,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            source,
            kind,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn skills(
        id: impl Into<RequirementId>,
        label: impl Into<String>,
        source: ChoiceSource,
        count: u8,
        options: Option<Vec<Skill>>,
    ) -> Self {
        Self::new(id, label, source, RequirementKind::Skills { count, options })
    }

    pub fn languages(
        id: impl Into<RequirementId>,
        label: impl Into<String>,
        source: ChoiceSource,
        count: u8,
    ) -> Self {
        Self::new(
            id,
            label,
            source,
            RequirementKind::Languages {
                count,
                options: None,
            },
        )
    }

    pub fn equipment(
        id: impl Into<RequirementId>,
        label: impl Into<String>,
        source: ChoiceSource,
        options: impl IntoIterator<Item = EquipmentOption>,
    ) -> Self {
        Self::new(
            id,
            label,
            source,
            RequirementKind::Equipment {
                options: options.into_iter().collect(),
            },
        )
    }

    #[inline]
    pub fn category(&self) -> Option<ChoiceCategory> {
        self.kind.category()
    }

    pub fn equipment_option(&self, option: &OptionId) -> Option<&EquipmentOption> {
        match &self.kind {
            RequirementKind::Equipment { options } => options.iter().find(|o| &o.id == option),
            _ => None,
        }
    }
}

/// Requirements resolved for one lookup, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub items: Vec<Requirement>,
}

impl Requirements {
    pub fn new(items: Vec<Requirement>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, requirement: Requirement) {
        self.items.push(requirement);
    }

    pub fn extend(&mut self, other: Requirements) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.items.iter()
    }

    pub fn find(&self, source: ChoiceSource, id: &RequirementId) -> Option<&Requirement> {
        self.items.iter().find(|r| r.source == source && &r.id == id)
    }

    pub fn find_mut(&mut self, id: &RequirementId) -> Option<&mut Requirement> {
        self.items.iter_mut().find(|r| &r.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl FromIterator<Requirement> for Requirements {
    fn from_iter<T: IntoIterator<Item = Requirement>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// What to look requirements up for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequirementsKey {
    Race {
        race: RaceId,
        subrace: Option<SubraceId>,
    },
    Class {
        class: ClassId,
        level: u8,
        subclass: Option<SubclassId>,
    },
    Background {
        background: BackgroundId,
    },
}
