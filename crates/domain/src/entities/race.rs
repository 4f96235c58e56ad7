use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::grants::AutomaticGrants;
use crate::ids::{RaceId, SubraceId};
use crate::value_objects::Ability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    #[default]
    Medium,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => write!(f, "small"),
            Size::Medium => write!(f, "medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceData {
    pub id: RaceId,
    pub name: String,
    pub size: Size,
    /// Walking speed in feet
    pub speed: u32,
    pub ability_increases: BTreeMap<Ability, i8>,
    pub grants: AutomaticGrants,
    pub subraces: Vec<SubraceData>,
}

impl RaceData {
    pub fn new(id: impl Into<RaceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: Size::Medium,
            speed: 30,
            ability_increases: BTreeMap::new(),
            grants: AutomaticGrants::default(),
            subraces: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_increase(mut self, ability: Ability, amount: i8) -> Self {
        self.ability_increases.insert(ability, amount);
        self
    }

    pub fn with_grants(mut self, grants: AutomaticGrants) -> Self {
        self.grants = grants;
        self
    }

    pub fn with_subrace(mut self, subrace: SubraceData) -> Self {
        self.subraces.push(subrace);
        self
    }

    pub fn subrace(&self, id: &SubraceId) -> Option<&SubraceData> {
        self.subraces.iter().find(|s| &s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubraceData {
    pub id: SubraceId,
    pub name: String,
    pub ability_increases: BTreeMap<Ability, i8>,
    pub grants: AutomaticGrants,
    /// Replaces the parent race's speed when set (wood elf)
    pub speed: Option<u32>,
}

impl SubraceData {
    pub fn new(id: impl Into<SubraceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ability_increases: BTreeMap::new(),
            grants: AutomaticGrants::default(),
            speed: None,
        }
    }

    pub fn with_increase(mut self, ability: Ability, amount: i8) -> Self {
        self.ability_increases.insert(ability, amount);
        self
    }

    pub fn with_grants(mut self, grants: AutomaticGrants) -> Self {
        self.grants = grants;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }
}
