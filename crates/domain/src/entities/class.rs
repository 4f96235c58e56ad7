//! Class content records

use serde::{Deserialize, Serialize};

use super::grants::AutomaticGrants;
use crate::game_systems::RestType;
use crate::ids::{ClassId, ResourceId, SubclassId};
use crate::value_objects::Ability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassData {
    pub id: ClassId,
    pub name: String,
    /// Faces of the hit die (d10 => 10)
    pub hit_die: u8,
    pub saving_throws: Vec<Ability>,
    pub grants: AutomaticGrants,
    /// Level at which the subclass must be chosen
    pub subclass_level: u8,
    pub subclasses: Vec<SubclassData>,
    /// Ability added to AC while wearing no armor (barbarian, monk)
    pub unarmored_defense: Option<Ability>,
    pub spellcasting: Option<SpellcastingData>,
    pub resources: Vec<ResourceData>,
}

impl ClassData {
    pub fn new(id: impl Into<ClassId>, name: impl Into<String>, hit_die: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hit_die,
            saving_throws: Vec::new(),
            grants: AutomaticGrants::default(),
            subclass_level: 3,
            subclasses: Vec::new(),
            unarmored_defense: None,
            spellcasting: None,
            resources: Vec::new(),
        }
    }

    pub fn with_saving_throws(mut self, first: Ability, second: Ability) -> Self {
        self.saving_throws = vec![first, second];
        self
    }

    pub fn with_grants(mut self, grants: AutomaticGrants) -> Self {
        self.grants = grants;
        self
    }

    pub fn with_subclass_level(mut self, level: u8) -> Self {
        self.subclass_level = level;
        self
    }

    pub fn with_subclass(mut self, subclass: SubclassData) -> Self {
        self.subclasses.push(subclass);
        self
    }

    pub fn with_unarmored_defense(mut self, ability: Ability) -> Self {
        self.unarmored_defense = Some(ability);
        self
    }

    pub fn with_spellcasting(mut self, spellcasting: SpellcastingData) -> Self {
        self.spellcasting = Some(spellcasting);
        self
    }

    pub fn with_resource(mut self, resource: ResourceData) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn subclass(&self, id: &SubclassId) -> Option<&SubclassData> {
        self.subclasses.iter().find(|s| &s.id == id)
    }

    /// Whether a subclass has to be picked at `level`.
    pub fn requires_subclass_at(&self, level: u8) -> bool {
        !self.subclasses.is_empty() && level >= self.subclass_level
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassData {
    pub id: SubclassId,
    pub name: String,
    pub grants: AutomaticGrants,
}

impl SubclassData {
    pub fn new(id: impl Into<SubclassId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grants: AutomaticGrants::default(),
        }
    }

    pub fn with_grants(mut self, grants: AutomaticGrants) -> Self {
        self.grants = grants;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingData {
    pub ability: Ability,
    /// Row per character level, column per spell level starting at 1st.
    pub slot_table: Vec<Vec<u8>>,
}

impl SpellcastingData {
    pub fn new(ability: Ability, slot_table: Vec<Vec<u8>>) -> Self {
        Self {
            ability,
            slot_table,
        }
    }

    /// Slots per spell level at a character level; empty past the table.
    pub fn slots_at(&self, level: u8) -> &[u8] {
        usize::from(level)
            .checked_sub(1)
            .and_then(|row| self.slot_table.get(row))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A limited-use class feature such as rage or second wind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData {
    pub id: ResourceId,
    pub name: String,
    /// Maximum uses per character level, index 0 is level 1
    pub max_by_level: Vec<u8>,
    pub recharge: RestType,
}

impl ResourceData {
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        max_by_level: Vec<u8>,
        recharge: RestType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_by_level,
            recharge,
        }
    }

    pub fn max_at(&self, level: u8) -> u8 {
        usize::from(level)
            .checked_sub(1)
            .and_then(|row| self.max_by_level.get(row))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_slots_are_read_by_character_level() {
        let casting = SpellcastingData::new(Ability::Wisdom, vec![vec![2], vec![3], vec![4, 2]]);
        assert_eq!(casting.slots_at(1), &[2]);
        assert_eq!(casting.slots_at(3), &[4, 2]);
        assert!(casting.slots_at(0).is_empty());
        assert!(casting.slots_at(9).is_empty());
    }

    #[test]
    fn subclass_requirement_depends_on_level() {
        let cleric = ClassData::new("cleric", "Cleric", 8)
            .with_subclass_level(1)
            .with_subclass(SubclassData::new("life", "Life Domain"));
        let fighter = ClassData::new("fighter", "Fighter", 10)
            .with_subclass(SubclassData::new("champion", "Champion"));

        assert!(cleric.requires_subclass_at(1));
        assert!(!fighter.requires_subclass_at(1));
        assert!(fighter.requires_subclass_at(3));
    }

    #[test]
    fn resource_max_defaults_to_zero_past_table() {
        let rage = ResourceData::new("rage", "Rage", vec![2, 2, 3], RestType::Long);
        assert_eq!(rage.max_at(1), 2);
        assert_eq!(rage.max_at(3), 3);
        assert_eq!(rage.max_at(4), 0);
    }
}
