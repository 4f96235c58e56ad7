//! Draft aggregate - the mutable character-in-progress
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: mutation only through the step setters
//! - **Two-level dedup**: each setter clears its own sources, then records
//!   choices with the equipment-by-requirement / other-by-category rule
//! - **Feedback, not failure**: setters return a `ValidationResult`; only
//!   structurally invalid calls return `Err`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::Character;
use crate::compiler;
use crate::entities::{GrantSource, Requirements, RequirementsKey};
use crate::error::CreationError;
use crate::game_systems::RulesetContent;
use crate::ids::{BackgroundId, ClassId, DraftId, PlayerId, RaceId, SubclassId, SubraceId};
use crate::settings::CreationSettings;
use crate::validation::{ValidationResult, Validator};
use crate::value_objects::{
    AbilityScoreMethod, AbilityScores, Choice, ChoiceCategory, ChoiceSource, DraftProgress,
    Selection,
};

/// Requirement keys used for the core creation steps.
pub mod step_keys {
    pub const NAME: &str = "name";
    pub const RACE: &str = "race";
    pub const CLASS: &str = "class";
    pub const BACKGROUND: &str = "background";
    pub const ABILITY_SCORES: &str = "ability_scores";
}

/// A character being built.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use heroforge_domain::{Draft, DraftId, PlayerId};
///
/// let draft = Draft::new(DraftId::new(), PlayerId::new(), Utc::now());
/// assert!(draft.choices().is_empty());
/// assert!(!draft.progress().is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Draft {
    // Identity
    id: DraftId,
    player_id: PlayerId,

    // Core identity, mirrored from the recorded player choices
    name: Option<String>,
    race: Option<RaceId>,
    subrace: Option<SubraceId>,
    class: Option<ClassId>,
    subclass: Option<SubclassId>,
    background: Option<BackgroundId>,
    ability_scores: Option<AbilityScores>,
    ability_method: AbilityScoreMethod,

    level: u8,
    choices: Vec<Choice>,
    progress: DraftProgress,
    settings: CreationSettings,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Draft {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(id: DraftId, player_id: PlayerId, now: DateTime<Utc>) -> Self {
        let settings = CreationSettings::default();
        Self {
            id,
            player_id,
            name: None,
            race: None,
            subrace: None,
            class: None,
            subclass: None,
            background: None,
            ability_scores: None,
            ability_method: AbilityScoreMethod::default(),
            level: settings.starting_level,
            choices: Vec::new(),
            progress: DraftProgress::empty(),
            settings,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_settings(mut self, settings: CreationSettings) -> Self {
        self.level = settings.starting_level;
        self.settings = settings;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> DraftId {
        self.id
    }

    #[inline]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn race(&self) -> Option<&RaceId> {
        self.race.as_ref()
    }

    #[inline]
    pub fn subrace(&self) -> Option<&SubraceId> {
        self.subrace.as_ref()
    }

    #[inline]
    pub fn class(&self) -> Option<&ClassId> {
        self.class.as_ref()
    }

    #[inline]
    pub fn subclass(&self) -> Option<&SubclassId> {
        self.subclass.as_ref()
    }

    #[inline]
    pub fn background(&self) -> Option<&BackgroundId> {
        self.background.as_ref()
    }

    #[inline]
    pub fn ability_scores(&self) -> Option<&AbilityScores> {
        self.ability_scores.as_ref()
    }

    #[inline]
    pub fn ability_method(&self) -> AbilityScoreMethod {
        self.ability_method
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[inline]
    pub fn progress(&self) -> DraftProgress {
        self.progress
    }

    #[inline]
    pub fn settings(&self) -> &CreationSettings {
        &self.settings
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Choices recorded for one source, in recording order.
    pub fn choices_from(&self, source: ChoiceSource) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(move |c| c.source == source)
    }

    pub fn choices_in(&self, category: ChoiceCategory) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(move |c| c.category() == category)
    }

    // =========================================================================
    // Creation steps
    // =========================================================================

    pub fn set_name(
        &mut self,
        ruleset: &dyn RulesetContent,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<ValidationResult, CreationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CreationError::invalid_input("character name cannot be empty"));
        }

        self.record(Choice::new(
            ChoiceSource::Player,
            step_keys::NAME,
            Selection::Name(name.clone()),
        ));
        self.name = Some(name);
        tracing::debug!(draft_id = %self.id, "Set draft name");
        Ok(self.touch(ruleset, now))
    }

    /// Choose a race (and optional subrace) with the choices it asks for.
    ///
    /// Every previously recorded race and subrace choice is discarded first.
    pub fn set_race(
        &mut self,
        ruleset: &dyn RulesetContent,
        race: RaceId,
        subrace: Option<SubraceId>,
        choices: Vec<Choice>,
        now: DateTime<Utc>,
    ) -> Result<ValidationResult, CreationError> {
        if race.is_empty() {
            return Err(CreationError::invalid_input("race id cannot be empty"));
        }
        let race_data = ruleset
            .race(&race)
            .ok_or_else(|| CreationError::content_not_found("race", &race))?;
        if let Some(subrace) = &subrace {
            if race_data.subrace(subrace).is_none() {
                return Err(CreationError::content_not_found("subrace", subrace));
            }
        }

        let mut allowed = vec![ChoiceSource::Race];
        if subrace.is_some() {
            allowed.push(ChoiceSource::Subrace);
        }
        check_choices("race", &choices, &allowed)?;

        self.replace_step(
            Choice::new(
                ChoiceSource::Player,
                step_keys::RACE,
                Selection::Race {
                    race: race.clone(),
                    subrace: subrace.clone(),
                },
            ),
            &[ChoiceSource::Race, ChoiceSource::Subrace],
            choices,
        );

        tracing::debug!(
            draft_id = %self.id,
            race = %race,
            subrace = ?subrace.as_ref().map(|s| s.as_str()),
            "Set draft race"
        );
        self.race = Some(race);
        self.subrace = subrace;
        Ok(self.touch(ruleset, now))
    }

    /// Choose a class (and optional subclass) with the choices it asks for.
    ///
    /// Every previously recorded class and subclass choice is discarded first,
    /// so a re-set must resupply all of them.
    pub fn set_class(
        &mut self,
        ruleset: &dyn RulesetContent,
        class: ClassId,
        subclass: Option<SubclassId>,
        choices: Vec<Choice>,
        now: DateTime<Utc>,
    ) -> Result<ValidationResult, CreationError> {
        if class.is_empty() {
            return Err(CreationError::invalid_input("class id cannot be empty"));
        }
        let class_data = ruleset
            .class(&class)
            .ok_or_else(|| CreationError::content_not_found("class", &class))?;
        if let Some(subclass) = &subclass {
            if class_data.subclass(subclass).is_none() {
                return Err(CreationError::content_not_found("subclass", subclass));
            }
        }

        let mut allowed = vec![ChoiceSource::Class];
        if subclass.is_some() {
            allowed.push(ChoiceSource::Subclass);
        }
        check_choices("class", &choices, &allowed)?;

        self.replace_step(
            Choice::new(
                ChoiceSource::Player,
                step_keys::CLASS,
                Selection::Class {
                    class: class.clone(),
                    subclass: subclass.clone(),
                },
            ),
            &[ChoiceSource::Class, ChoiceSource::Subclass],
            choices,
        );

        tracing::debug!(
            draft_id = %self.id,
            class = %class,
            subclass = ?subclass.as_ref().map(|s| s.as_str()),
            "Set draft class"
        );
        self.class = Some(class);
        self.subclass = subclass;
        Ok(self.touch(ruleset, now))
    }

    pub fn set_background(
        &mut self,
        ruleset: &dyn RulesetContent,
        background: BackgroundId,
        choices: Vec<Choice>,
        now: DateTime<Utc>,
    ) -> Result<ValidationResult, CreationError> {
        if background.is_empty() {
            return Err(CreationError::invalid_input("background id cannot be empty"));
        }
        if ruleset.background(&background).is_none() {
            return Err(CreationError::content_not_found("background", &background));
        }
        check_choices("background", &choices, &[ChoiceSource::Background])?;

        self.replace_step(
            Choice::new(
                ChoiceSource::Player,
                step_keys::BACKGROUND,
                Selection::Background(background.clone()),
            ),
            &[ChoiceSource::Background],
            choices,
        );

        tracing::debug!(draft_id = %self.id, background = %background, "Set draft background");
        self.background = Some(background);
        Ok(self.touch(ruleset, now))
    }

    /// Assign base scores. Range and method checks surface as validation errors.
    pub fn set_ability_scores(
        &mut self,
        ruleset: &dyn RulesetContent,
        scores: AbilityScores,
        method: Option<AbilityScoreMethod>,
        now: DateTime<Utc>,
    ) -> Result<ValidationResult, CreationError> {
        let method = method.unwrap_or_default();
        self.record(Choice::new(
            ChoiceSource::Player,
            step_keys::ABILITY_SCORES,
            Selection::AbilityScores { scores, method },
        ));
        self.ability_scores = Some(scores);
        self.ability_method = method;

        tracing::debug!(draft_id = %self.id, method = %method, "Set draft ability scores");
        Ok(self.touch(ruleset, now))
    }

    // =========================================================================
    // Validation and finalize
    // =========================================================================

    /// Re-check the draft without changing it.
    pub fn validate(&self, ruleset: &dyn RulesetContent) -> ValidationResult {
        Validator::new(ruleset, &self.settings).validate(self)
    }

    /// Every requirement the current race, class and background impose.
    pub fn requirements(&self, ruleset: &dyn RulesetContent) -> Requirements {
        let mut requirements = Requirements::default();
        if let Some(race) = &self.race {
            requirements.extend(ruleset.requirements(&RequirementsKey::Race {
                race: race.clone(),
                subrace: self.subrace.clone(),
            }));
        }
        if let Some(class) = &self.class {
            requirements.extend(ruleset.requirements(&RequirementsKey::Class {
                class: class.clone(),
                level: self.level,
                subclass: self.subclass.clone(),
            }));
        }
        if let Some(background) = &self.background {
            requirements.extend(ruleset.requirements(&RequirementsKey::Background {
                background: background.clone(),
            }));
        }
        requirements
    }

    /// Content records whose automatic grants apply to this draft.
    pub fn grant_sources(&self) -> Vec<GrantSource> {
        let mut sources = Vec::new();
        if let Some(race) = &self.race {
            sources.push(GrantSource::Race(race.clone()));
            if let Some(subrace) = &self.subrace {
                sources.push(GrantSource::Subrace(race.clone(), subrace.clone()));
            }
        }
        if let Some(class) = &self.class {
            sources.push(GrantSource::Class(class.clone()));
            if let Some(subclass) = &self.subclass {
                sources.push(GrantSource::Subclass(class.clone(), subclass.clone()));
            }
        }
        if let Some(background) = &self.background {
            sources.push(GrantSource::Background(background.clone()));
        }
        sources
    }

    /// Compile the draft into an immutable character.
    ///
    /// Fails with `NotFinalizable` unless validation allows it. The draft is
    /// left untouched either way.
    pub fn finalize(
        &self,
        ruleset: &dyn RulesetContent,
        now: DateTime<Utc>,
    ) -> Result<Character, CreationError> {
        let validation = self.validate(ruleset);
        if !validation.can_finalize {
            tracing::warn!(
                draft_id = %self.id,
                errors = validation.errors.len(),
                incomplete = validation.incomplete.len(),
                "Refusing to finalize draft"
            );
            return Err(CreationError::not_finalizable(validation.blocking_messages()));
        }

        let character = compiler::compile(self, ruleset, now)?;
        tracing::info!(
            draft_id = %self.id,
            character_id = %character.id(),
            "Finalized character"
        );
        Ok(character)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub fn to_persistable_state(&self) -> DraftState {
        DraftState {
            id: self.id,
            player_id: self.player_id,
            name: self.name.clone(),
            race: self.race.clone(),
            subrace: self.subrace.clone(),
            class: self.class.clone(),
            subclass: self.subclass.clone(),
            background: self.background.clone(),
            ability_scores: self.ability_scores,
            ability_method: self.ability_method,
            level: self.level,
            choices: self.choices.clone(),
            progress: self.progress,
            settings: self.settings.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Rebuild a draft from a snapshot. Progress is recomputed, not trusted.
    pub fn load_from_persistable_state(state: DraftState) -> Self {
        let mut draft = Self {
            id: state.id,
            player_id: state.player_id,
            name: state.name,
            race: state.race,
            subrace: state.subrace,
            class: state.class,
            subclass: state.subclass,
            background: state.background,
            ability_scores: state.ability_scores,
            ability_method: state.ability_method,
            level: state.level,
            choices: state.choices,
            progress: state.progress,
            settings: state.settings,
            created_at: state.created_at,
            updated_at: state.updated_at,
        };
        draft.refresh_progress();
        draft
    }

    // =========================================================================
    // Choice recording
    // =========================================================================

    /// Swap out a step's block: its player entry plus every choice from the
    /// given sources. The new block lands where the old one started, so a
    /// re-set with identical inputs leaves `choices` unchanged.
    fn replace_step(&mut self, step: Choice, sources: &[ChoiceSource], choices: Vec<Choice>) {
        let in_block =
            |existing: &Choice| step.supersedes(existing) || sources.contains(&existing.source);
        let anchor = self
            .choices
            .iter()
            .position(in_block)
            .unwrap_or(self.choices.len());
        self.choices.retain(|existing| !in_block(existing));

        let mut block = vec![step];
        for choice in choices {
            record_into(&mut block, choice);
        }
        self.choices.splice(anchor..anchor, block);
    }

    fn record(&mut self, choice: Choice) {
        record_into(&mut self.choices, choice);
    }

    fn refresh_progress(&mut self) {
        let mut progress = DraftProgress::empty();
        progress.set(DraftProgress::NAME, self.name.is_some());
        progress.set(DraftProgress::RACE, self.race.is_some());
        progress.set(DraftProgress::CLASS, self.class.is_some());
        progress.set(DraftProgress::BACKGROUND, self.background.is_some());
        progress.set(DraftProgress::ABILITY_SCORES, self.ability_scores.is_some());
        for choice in &self.choices {
            match choice.category() {
                ChoiceCategory::Skills | ChoiceCategory::Expertise => {
                    progress.insert(DraftProgress::SKILLS)
                }
                ChoiceCategory::Languages => progress.insert(DraftProgress::LANGUAGES),
                ChoiceCategory::Equipment => progress.insert(DraftProgress::EQUIPMENT),
                ChoiceCategory::Spells | ChoiceCategory::Cantrips => {
                    progress.insert(DraftProgress::SPELLS)
                }
                _ => {}
            }
        }
        self.progress = progress;
    }

    fn touch(&mut self, ruleset: &dyn RulesetContent, now: DateTime<Utc>) -> ValidationResult {
        self.refresh_progress();
        self.updated_at = now;
        self.validate(ruleset)
    }
}

/// Record `choice`, replacing what it supersedes at the earliest such slot.
fn record_into(choices: &mut Vec<Choice>, choice: Choice) {
    let Some(slot) = choices.iter().position(|existing| choice.supersedes(existing)) else {
        choices.push(choice);
        return;
    };
    let mut index = 0;
    choices.retain(|existing| {
        let keep = index <= slot || !choice.supersedes(existing);
        index += 1;
        keep
    });
    choices[slot] = choice;
}

/// Reject sub-choices a step is not allowed to record.
fn check_choices(
    step: &str,
    choices: &[Choice],
    allowed: &[ChoiceSource],
) -> Result<(), CreationError> {
    for choice in choices {
        if !allowed.contains(&choice.source) {
            return Err(CreationError::invalid_input(format!(
                "{step} step cannot record a choice from source {}",
                choice.source
            )));
        }
        if choice.category().is_core() {
            return Err(CreationError::invalid_input(format!(
                "{} is set by its own step, not as a {step} choice",
                choice.category()
            )));
        }
        if choice.requirement_id.is_empty() {
            return Err(CreationError::invalid_input(
                "choice requirement id cannot be empty",
            ));
        }
    }
    Ok(())
}

/// Round-trippable snapshot of a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftState {
    pub id: DraftId,
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub race: Option<RaceId>,
    pub subrace: Option<SubraceId>,
    pub class: Option<ClassId>,
    pub subclass: Option<SubclassId>,
    pub background: Option<BackgroundId>,
    pub ability_scores: Option<AbilityScores>,
    #[serde(default)]
    pub ability_method: AbilityScoreMethod,
    pub level: u8,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub progress: DraftProgress,
    #[serde(default)]
    pub settings: CreationSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
