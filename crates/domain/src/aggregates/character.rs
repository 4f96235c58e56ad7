//! Character aggregate - the finalized, immutable result of creation
//!
//! Only the compiler builds one. There are no mutators; derived values such
//! as modifiers and armor class are computed from the stored fields on read.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ArmorProficiency, Size};
use crate::error::CreationError;
use crate::game_systems::{CalculationEngine, Dnd5eSystem, ProficiencyLevel, RestType};
use crate::ids::{
    BackgroundId, CharacterId, ClassId, DraftId, FightingStyleId, LanguageId, PlayerId,
    ProficiencyId, RaceId, ResourceId, SpellId, SubclassId, SubraceId, ToolId, TraitId,
};
use crate::value_objects::{
    calculate_armor_class, Ability, AbilityScores, ArmorClassBreakdown, EquippedGear,
    InventoryEntry, Skill,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitDice {
    /// Faces of the die
    pub die: u8,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResource {
    pub id: ResourceId,
    pub name: String,
    pub current: u8,
    pub max: u8,
    pub recharge: RestType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlot {
    pub current: u8,
    pub max: u8,
}

/// Known spells and slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpells {
    pub spellcasting_ability: Option<Ability>,
    pub cantrips: Vec<SpellId>,
    /// Leveled spells keyed by spell level
    pub known: BTreeMap<u8, Vec<SpellId>>,
    /// Slots keyed by spell level
    pub slots: BTreeMap<u8, SpellSlot>,
}

impl CharacterSpells {
    pub fn is_caster(&self) -> bool {
        self.spellcasting_ability.is_some()
    }

    pub fn knows(&self, spell: &SpellId) -> bool {
        self.cantrips.contains(spell) || self.known.values().any(|spells| spells.contains(spell))
    }
}

/// A finalized character.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    // Identity
    id: CharacterId,
    player_id: PlayerId,
    draft_id: DraftId,
    name: String,
    level: u8,

    race: RaceId,
    subrace: Option<SubraceId>,
    class: ClassId,
    subclass: Option<SubclassId>,
    background: BackgroundId,

    // Physical
    ability_scores: AbilityScores,
    hit_points: HitPoints,
    hit_dice: HitDice,
    speed: u32,
    size: Size,

    // Proficiencies
    skills: BTreeMap<Skill, ProficiencyLevel>,
    saving_throws: BTreeSet<Ability>,
    languages: BTreeSet<LanguageId>,
    armor_proficiencies: BTreeSet<ArmorProficiency>,
    weapon_proficiencies: BTreeSet<ProficiencyId>,
    tool_proficiencies: BTreeSet<ToolId>,

    // Gear
    inventory: Vec<InventoryEntry>,
    equipped: EquippedGear,
    unarmored_defense: Option<Ability>,

    // Features
    spells: CharacterSpells,
    resources: Vec<ClassResource>,
    fighting_style: Option<FightingStyleId>,
    traits: Vec<TraitId>,

    created_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    #[inline]
    pub fn draft_id(&self) -> DraftId {
        self.draft_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn race(&self) -> &RaceId {
        &self.race
    }

    #[inline]
    pub fn subrace(&self) -> Option<&SubraceId> {
        self.subrace.as_ref()
    }

    #[inline]
    pub fn class(&self) -> &ClassId {
        &self.class
    }

    #[inline]
    pub fn subclass(&self) -> Option<&SubclassId> {
        self.subclass.as_ref()
    }

    #[inline]
    pub fn background(&self) -> &BackgroundId {
        &self.background
    }

    #[inline]
    pub fn ability_scores(&self) -> &AbilityScores {
        &self.ability_scores
    }

    #[inline]
    pub fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    #[inline]
    pub fn hit_dice(&self) -> HitDice {
        self.hit_dice
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn skills(&self) -> &BTreeMap<Skill, ProficiencyLevel> {
        &self.skills
    }

    #[inline]
    pub fn saving_throws(&self) -> &BTreeSet<Ability> {
        &self.saving_throws
    }

    #[inline]
    pub fn languages(&self) -> &BTreeSet<LanguageId> {
        &self.languages
    }

    #[inline]
    pub fn armor_proficiencies(&self) -> &BTreeSet<ArmorProficiency> {
        &self.armor_proficiencies
    }

    #[inline]
    pub fn weapon_proficiencies(&self) -> &BTreeSet<ProficiencyId> {
        &self.weapon_proficiencies
    }

    #[inline]
    pub fn tool_proficiencies(&self) -> &BTreeSet<ToolId> {
        &self.tool_proficiencies
    }

    #[inline]
    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    #[inline]
    pub fn equipped(&self) -> &EquippedGear {
        &self.equipped
    }

    #[inline]
    pub fn unarmored_defense(&self) -> Option<Ability> {
        self.unarmored_defense
    }

    #[inline]
    pub fn spells(&self) -> &CharacterSpells {
        &self.spells
    }

    #[inline]
    pub fn resources(&self) -> &[ClassResource] {
        &self.resources
    }

    #[inline]
    pub fn fighting_style(&self) -> Option<&FightingStyleId> {
        self.fighting_style.as_ref()
    }

    #[inline]
    pub fn traits(&self) -> &[TraitId] {
        &self.traits
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Derived statistics
    // =========================================================================

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.ability_scores.modifier(ability)
    }

    pub fn proficiency_bonus(&self) -> i32 {
        Dnd5eSystem::new().proficiency_bonus(self.level)
    }

    pub fn skill_proficiency(&self, skill: Skill) -> ProficiencyLevel {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    pub fn skill_modifier(&self, skill: Skill) -> i32 {
        Dnd5eSystem::new().skill_modifier(
            i32::from(self.ability_scores.get(skill.ability())),
            self.level,
            self.skill_proficiency(skill),
        )
    }

    pub fn saving_throw_modifier(&self, ability: Ability) -> i32 {
        let proficiency = if self.saving_throws.contains(&ability) {
            ProficiencyLevel::Proficient
        } else {
            ProficiencyLevel::None
        };
        Dnd5eSystem::new().skill_modifier(
            i32::from(self.ability_scores.get(ability)),
            self.level,
            proficiency,
        )
    }

    pub fn passive_perception(&self) -> i32 {
        Dnd5eSystem::new().passive_perception(
            i32::from(self.ability_scores.wisdom),
            self.level,
            self.skill_proficiency(Skill::Perception),
        )
    }

    pub fn initiative(&self) -> i32 {
        self.ability_modifier(Ability::Dexterity)
    }

    /// AC with an itemized breakdown for the currently equipped gear.
    pub fn armor_class(&self) -> ArmorClassBreakdown {
        calculate_armor_class(
            &self.equipped,
            &self.ability_scores,
            self.unarmored_defense,
        )
    }

    /// Total quantity of an item across all unmerged inventory entries.
    pub fn item_count(&self, item: &str) -> u32 {
        self.inventory
            .iter()
            .filter(|entry| entry.item.as_str() == item)
            .map(|entry| entry.quantity)
            .sum()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub fn to_persistable_state(&self) -> CharacterState {
        CharacterState {
            id: self.id,
            player_id: self.player_id,
            draft_id: self.draft_id,
            name: self.name.clone(),
            level: self.level,
            race: self.race.clone(),
            subrace: self.subrace.clone(),
            class: self.class.clone(),
            subclass: self.subclass.clone(),
            background: self.background.clone(),
            ability_scores: self.ability_scores,
            hit_points: self.hit_points,
            hit_dice: self.hit_dice,
            speed: self.speed,
            size: self.size,
            skills: self.skills.clone(),
            saving_throws: self.saving_throws.clone(),
            languages: self.languages.clone(),
            armor_proficiencies: self.armor_proficiencies.clone(),
            weapon_proficiencies: self.weapon_proficiencies.clone(),
            tool_proficiencies: self.tool_proficiencies.clone(),
            inventory: self.inventory.clone(),
            equipped: self.equipped.clone(),
            unarmored_defense: self.unarmored_defense,
            spells: self.spells.clone(),
            resources: self.resources.clone(),
            fighting_style: self.fighting_style.clone(),
            traits: self.traits.clone(),
            created_at: self.created_at,
        }
    }

    /// Rebuild a character from a snapshot.
    pub fn from_persistable_state(state: CharacterState) -> Result<Self, CreationError> {
        if state.name.trim().is_empty() {
            return Err(CreationError::persistence("character snapshot has no name"));
        }
        if state.level == 0 {
            return Err(CreationError::persistence("character snapshot has level 0"));
        }
        Ok(Self::from(state))
    }
}

impl From<CharacterState> for Character {
    fn from(state: CharacterState) -> Self {
        Self {
            id: state.id,
            player_id: state.player_id,
            draft_id: state.draft_id,
            name: state.name,
            level: state.level,
            race: state.race,
            subrace: state.subrace,
            class: state.class,
            subclass: state.subclass,
            background: state.background,
            ability_scores: state.ability_scores,
            hit_points: state.hit_points,
            hit_dice: state.hit_dice,
            speed: state.speed,
            size: state.size,
            skills: state.skills,
            saving_throws: state.saving_throws,
            languages: state.languages,
            armor_proficiencies: state.armor_proficiencies,
            weapon_proficiencies: state.weapon_proficiencies,
            tool_proficiencies: state.tool_proficiencies,
            inventory: state.inventory,
            equipped: state.equipped,
            unarmored_defense: state.unarmored_defense,
            spells: state.spells,
            resources: state.resources,
            fighting_style: state.fighting_style,
            traits: state.traits,
            created_at: state.created_at,
        }
    }
}

/// Round-trippable snapshot of a character.
///
/// The compiler fills one of these and converts it, so every field a
/// character has passes through here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    pub id: CharacterId,
    pub player_id: PlayerId,
    pub draft_id: DraftId,
    pub name: String,
    pub level: u8,
    pub race: RaceId,
    pub subrace: Option<SubraceId>,
    pub class: ClassId,
    pub subclass: Option<SubclassId>,
    pub background: BackgroundId,
    pub ability_scores: AbilityScores,
    pub hit_points: HitPoints,
    pub hit_dice: HitDice,
    pub speed: u32,
    pub size: Size,
    pub skills: BTreeMap<Skill, ProficiencyLevel>,
    pub saving_throws: BTreeSet<Ability>,
    pub languages: BTreeSet<LanguageId>,
    pub armor_proficiencies: BTreeSet<ArmorProficiency>,
    pub weapon_proficiencies: BTreeSet<ProficiencyId>,
    pub tool_proficiencies: BTreeSet<ToolId>,
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub equipped: EquippedGear,
    pub unarmored_defense: Option<Ability>,
    #[serde(default)]
    pub spells: CharacterSpells,
    #[serde(default)]
    pub resources: Vec<ClassResource>,
    pub fighting_style: Option<FightingStyleId>,
    #[serde(default)]
    pub traits: Vec<TraitId>,
    pub created_at: DateTime<Utc>,
}
