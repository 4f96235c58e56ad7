//! Draft compiler
//!
//! A pure fold from a finalizable draft plus resolved ruleset content into a
//! `Character`. Each concern merges contributions from every source that can
//! grant it; nothing reads or writes outside its inputs.

mod inventory;
mod spellcasting;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use crate::aggregates::{
    Character, CharacterState, ClassResource, Draft, HitDice, HitPoints,
};
use crate::entities::{AutomaticGrants, GrantSource};
use crate::error::CreationError;
use crate::game_systems::{CalculationEngine, Dnd5eSystem, ProficiencyLevel, RulesetContent};
use crate::ids::{CharacterId, LanguageId};
use crate::value_objects::{Ability, ChoiceSource, Selection};

/// Compile a draft into a character.
///
/// Does not re-run validation; `Draft::finalize` gates on that. Missing
/// core content fails before any transformation, and an equipment choice
/// that cannot be resolved fails the whole compile.
pub fn compile(
    draft: &Draft,
    ruleset: &dyn RulesetContent,
    now: DateTime<Utc>,
) -> Result<Character, CreationError> {
    // ── Required inputs ──────────────────────────────────────────────────
    let name = draft
        .name()
        .ok_or_else(|| CreationError::invalid_input("draft has no name"))?;
    let race_id = draft
        .race()
        .ok_or_else(|| CreationError::invalid_input("draft has no race"))?;
    let class_id = draft
        .class()
        .ok_or_else(|| CreationError::invalid_input("draft has no class"))?;
    let background_id = draft
        .background()
        .ok_or_else(|| CreationError::invalid_input("draft has no background"))?;
    let base_scores = draft
        .ability_scores()
        .ok_or_else(|| CreationError::invalid_input("draft has no ability scores"))?;

    let race = ruleset
        .race(race_id)
        .ok_or_else(|| CreationError::content_not_found("race", race_id))?;
    let subrace = match draft.subrace() {
        Some(id) => Some(
            race.subrace(id)
                .cloned()
                .ok_or_else(|| CreationError::content_not_found("subrace", id))?,
        ),
        None => None,
    };
    let class = ruleset
        .class(class_id)
        .ok_or_else(|| CreationError::content_not_found("class", class_id))?;
    if let Some(id) = draft.subclass() {
        if class.subclass(id).is_none() {
            return Err(CreationError::content_not_found("subclass", id));
        }
    }
    if ruleset.background(background_id).is_none() {
        return Err(CreationError::content_not_found("background", background_id));
    }

    let rules = Dnd5eSystem::new();
    let level = draft.level();
    let choices = draft.choices();

    // ── Ability scores ───────────────────────────────────────────────────
    let mut scores = *base_scores;
    scores.apply_increases(&race.ability_increases);
    if let Some(subrace) = &subrace {
        scores.apply_increases(&subrace.ability_increases);
    }
    for choice in choices {
        if let Selection::AbilityIncreases(increases) = &choice.selection {
            scores.apply_increases(increases);
        }
    }

    let max_hp = rules.first_level_hit_points(class.hit_die, scores.modifier(Ability::Constitution));

    // ── Automatic grants ─────────────────────────────────────────────────
    let grants: Vec<(GrantSource, AutomaticGrants)> = draft
        .grant_sources()
        .into_iter()
        .map(|source| {
            let granted = ruleset.automatic_grants(&source);
            (source, granted)
        })
        .collect();
    let all_grants: Vec<&AutomaticGrants> = grants.iter().map(|(_, g)| g).collect();

    // ── Skills ───────────────────────────────────────────────────────────
    let mut skills = BTreeMap::new();
    for skill in all_grants.iter().flat_map(|g| g.skills.iter()) {
        skills.insert(*skill, ProficiencyLevel::Proficient);
    }
    for choice in choices {
        if let Selection::Skills(chosen) = &choice.selection {
            for skill in chosen {
                skills
                    .entry(*skill)
                    .or_insert(ProficiencyLevel::Proficient);
            }
        }
    }
    for choice in choices {
        if let Selection::Expertise(chosen) = &choice.selection {
            for skill in chosen {
                skills.insert(*skill, ProficiencyLevel::Expert);
            }
        }
    }

    // ── Languages ────────────────────────────────────────────────────────
    let mut languages = BTreeSet::from([LanguageId::common()]);
    languages.extend(all_grants.iter().flat_map(|g| g.languages.iter().cloned()));
    for choice in choices {
        if let Selection::Languages(chosen) = &choice.selection {
            languages.extend(chosen.iter().cloned());
        }
    }

    // ── Proficiencies ────────────────────────────────────────────────────
    let armor_proficiencies: BTreeSet<_> = all_grants
        .iter()
        .flat_map(|g| g.armor.iter().copied())
        .collect();
    let weapon_proficiencies: BTreeSet<_> = all_grants
        .iter()
        .flat_map(|g| g.weapons.iter().cloned())
        .collect();
    let mut tool_proficiencies: BTreeSet<_> = all_grants
        .iter()
        .flat_map(|g| g.tools.iter().cloned())
        .collect();
    for choice in choices {
        if let Selection::Tools(chosen) = &choice.selection {
            tool_proficiencies.extend(chosen.iter().cloned());
        }
    }

    // ── Inventory ────────────────────────────────────────────────────────
    let starting: Vec<(ChoiceSource, &AutomaticGrants)> = [ChoiceSource::Class, ChoiceSource::Background]
        .into_iter()
        .flat_map(|wanted| {
            grants
                .iter()
                .filter(move |(source, _)| source.choice_source() == wanted)
                .map(move |(_, g)| (wanted, g))
        })
        .collect();
    let requirements = draft.requirements(ruleset);
    let inventory =
        inventory::resolve_inventory(ruleset, &starting, choices, &requirements).inspect_err(
            |err| {
                tracing::warn!(
                    draft_id = %draft.id(),
                    error = %err,
                    "Equipment resolution failed during compile"
                )
            },
        )?;
    let equipped = inventory::auto_equip(ruleset, &inventory, &armor_proficiencies);

    // ── Spells and resources ─────────────────────────────────────────────
    let spells = spellcasting::compile_spells(&class, level, &all_grants, choices);
    let resources = class
        .resources
        .iter()
        .map(|resource| {
            let max = resource.max_at(level);
            ClassResource {
                id: resource.id.clone(),
                name: resource.name.clone(),
                current: max,
                max,
                recharge: resource.recharge,
            }
        })
        .collect();

    // ── Features ─────────────────────────────────────────────────────────
    let fighting_style = choices.iter().find_map(|choice| match &choice.selection {
        Selection::FightingStyle(style) => Some(style.clone()),
        _ => None,
    });
    let mut traits = Vec::new();
    let chosen_traits = choices.iter().flat_map(|choice| match &choice.selection {
        Selection::Traits(chosen) => chosen.as_slice(),
        _ => &[][..],
    });
    for id in all_grants.iter().flat_map(|g| g.traits.iter()).chain(chosen_traits) {
        if !traits.contains(id) {
            traits.push(id.clone());
        }
    }

    let state = CharacterState {
        id: CharacterId::new(),
        player_id: draft.player_id(),
        draft_id: draft.id(),
        name: name.to_string(),
        level,
        race: race_id.clone(),
        subrace: draft.subrace().cloned(),
        class: class_id.clone(),
        subclass: draft.subclass().cloned(),
        background: background_id.clone(),
        ability_scores: scores,
        hit_points: HitPoints {
            current: max_hp,
            max: max_hp,
        },
        hit_dice: HitDice {
            die: class.hit_die,
            count: level,
        },
        speed: subrace.as_ref().and_then(|s| s.speed).unwrap_or(race.speed),
        size: race.size,
        skills,
        saving_throws: class.saving_throws.iter().copied().collect(),
        languages,
        armor_proficiencies,
        weapon_proficiencies,
        tool_proficiencies,
        inventory,
        equipped,
        unarmored_defense: class.unarmored_defense,
        spells,
        resources,
        fighting_style,
        traits,
        created_at: now,
    };

    tracing::debug!(
        draft_id = %draft.id(),
        character_id = %state.id,
        inventory_entries = state.inventory.len(),
        "Compiled draft"
    );
    Ok(Character::from(state))
}
