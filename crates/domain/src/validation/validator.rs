//! Draft validator
//!
//! Compares recorded choices against the requirements the draft's race,
//! class and background impose. Problems are collected, never raised.

use std::collections::BTreeSet;
use std::fmt::Display;

use super::result::{IssueCode, ValidationIssue, ValidationResult};
use crate::aggregates::{step_keys, Draft};
use crate::entities::{
    AutomaticGrants, EquipmentOption, GrantSource, ItemGrant, ItemKind, Requirement,
    RequirementKind, Requirements,
};
use crate::game_systems::RulesetContent;
use crate::ids::{ItemId, LanguageId, RequirementId};
use crate::settings::{CreationSettings, EquipmentValidation};
use crate::value_objects::{
    AbilityScoreMethod, Choice, ChoiceCategory, ChoiceSource, DraftProgress, Selection,
    Skill,
};

pub struct Validator<'a> {
    ruleset: &'a dyn RulesetContent,
    settings: &'a CreationSettings,
}

impl<'a> Validator<'a> {
    pub fn new(ruleset: &'a dyn RulesetContent, settings: &'a CreationSettings) -> Self {
        Self { ruleset, settings }
    }

    pub fn validate(&self, draft: &Draft) -> ValidationResult {
        let mut result = ValidationResult::new();

        self.check_structure(draft, &mut result);
        self.check_core_steps(draft, &mut result);
        self.check_ability_scores(draft, &mut result);

        let requirements = draft.requirements(self.ruleset);
        for requirement in requirements.iter() {
            self.check_requirement(draft, requirement, &mut result);
        }
        self.check_unexpected(draft, &requirements, &mut result);

        let grants: Vec<(GrantSource, AutomaticGrants)> = draft
            .grant_sources()
            .into_iter()
            .map(|source| {
                let granted = self.ruleset.automatic_grants(&source);
                (source, granted)
            })
            .collect();
        if self.settings.equipment_validation == EquipmentValidation::Eager {
            self.check_granted_equipment(&grants, &mut result);
        }
        self.check_redundancy(draft, &grants, &mut result);
        self.check_cross_source(draft, &mut result);
        self.check_expertise(draft, &grants, &mut result);

        let result = result.finish();
        tracing::debug!(
            draft_id = %draft.id(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            incomplete = result.incomplete.len(),
            can_finalize = result.can_finalize,
            "Validated draft"
        );
        result
    }

    // =========================================================================
    // Structure and core steps
    // =========================================================================

    /// Duplicate keys or misplaced sources can only come from a bad snapshot.
    fn check_structure(&self, draft: &Draft, result: &mut ValidationResult) {
        let choices = draft.choices();
        for (index, choice) in choices.iter().enumerate() {
            if choices[..index].iter().any(|earlier| choice.supersedes(earlier)) {
                result.push(
                    ValidationIssue::error(
                        IssueCode::CorruptDraft,
                        format!(
                            "duplicate {} choice from {} ({})",
                            choice.category(),
                            choice.source,
                            choice.requirement_id
                        ),
                    )
                    .with_source(choice.source),
                );
            }
            let core = choice.category().is_core();
            if core != (choice.source == ChoiceSource::Player) {
                result.push(
                    ValidationIssue::error(
                        IssueCode::CorruptDraft,
                        format!(
                            "{} choice cannot come from source {}",
                            choice.category(),
                            choice.source
                        ),
                    )
                    .with_source(choice.source),
                );
            }
        }

        if draft.subrace().is_some() && draft.race().is_none() {
            result.push(ValidationIssue::error(
                IssueCode::CorruptDraft,
                "subrace set without a race",
            ));
        }
        if draft.subclass().is_some() && draft.class().is_none() {
            result.push(ValidationIssue::error(
                IssueCode::CorruptDraft,
                "subclass set without a class",
            ));
        }
    }

    fn check_core_steps(&self, draft: &Draft, result: &mut ValidationResult) {
        let missing = draft.progress().missing();
        let steps = [
            (DraftProgress::NAME, step_keys::NAME),
            (DraftProgress::RACE, step_keys::RACE),
            (DraftProgress::CLASS, step_keys::CLASS),
            (DraftProgress::BACKGROUND, step_keys::BACKGROUND),
            (DraftProgress::ABILITY_SCORES, step_keys::ABILITY_SCORES),
        ];
        for (flag, key) in steps {
            if missing.contains(flag) {
                result.mark_incomplete(RequirementId::new(key));
            }
        }
    }

    fn check_ability_scores(&self, draft: &Draft, result: &mut ValidationResult) {
        let Some(scores) = draft.ability_scores() else {
            return;
        };
        let min = self.settings.ability_score_min;
        let max = self.settings.ability_score_max;
        let key = RequirementId::new(step_keys::ABILITY_SCORES);

        for (ability, score) in scores.iter() {
            if score < min {
                result.push(
                    ValidationIssue::error(
                        IssueCode::AbilityScoreTooLow,
                        format!("{ability} {score} is below the minimum of {min}"),
                    )
                    .with_source(ChoiceSource::Player)
                    .with_requirement(key.clone()),
                );
            } else if score > max {
                result.push(
                    ValidationIssue::error(
                        IssueCode::AbilityScoreTooHigh,
                        format!("{ability} {score} is above the maximum of {max}"),
                    )
                    .with_source(ChoiceSource::Player)
                    .with_requirement(key.clone()),
                );
            }
        }

        match draft.ability_method() {
            AbilityScoreMethod::Standard => {
                let mut assigned: Vec<u8> = scores.iter().map(|(_, s)| s).collect();
                let mut expected = AbilityScoreMethod::STANDARD_ARRAY.to_vec();
                assigned.sort_unstable();
                expected.sort_unstable();
                if assigned != expected {
                    result.push(
                        ValidationIssue::error(
                            IssueCode::InvalidStandardArray,
                            "standard array scores must be 15, 14, 13, 12, 10 and 8",
                        )
                        .with_source(ChoiceSource::Player)
                        .with_requirement(key),
                    );
                }
            }
            AbilityScoreMethod::PointBuy => {
                let mut spent: u32 = 0;
                for (ability, score) in scores.iter() {
                    match AbilityScoreMethod::point_buy_cost(score) {
                        Some(cost) => spent += u32::from(cost),
                        None => result.push(
                            ValidationIssue::error(
                                IssueCode::PointBuyOutOfRange,
                                format!("point buy {ability} must be between 8 and 15, got {score}"),
                            )
                            .with_source(ChoiceSource::Player)
                            .with_requirement(key.clone()),
                        ),
                    }
                }
                let budget = u32::from(self.settings.point_buy_budget);
                if spent > budget {
                    result.push(
                        ValidationIssue::error(
                            IssueCode::PointBuyOverBudget,
                            format!("point buy spends {spent} of {budget} points"),
                        )
                        .with_source(ChoiceSource::Player)
                        .with_requirement(key),
                    );
                }
            }
            AbilityScoreMethod::Rolled | AbilityScoreMethod::Manual => {}
        }
    }

    // =========================================================================
    // Requirements
    // =========================================================================

    fn check_requirement(
        &self,
        draft: &Draft,
        requirement: &Requirement,
        result: &mut ValidationResult,
    ) {
        if let RequirementKind::Subclass { options } = &requirement.kind {
            match draft.subclass() {
                None => {
                    result.push(
                        ValidationIssue::error(
                            IssueCode::MissingSubclass,
                            format!("{}: a subclass must be chosen", requirement.label),
                        )
                        .with_source(requirement.source)
                        .with_requirement(requirement.id.clone()),
                    );
                    result.mark_incomplete(requirement.id.clone());
                }
                Some(subclass) if !options.is_empty() && !options.contains(subclass) => {
                    result.push(
                        ValidationIssue::error(
                            IssueCode::InvalidOption,
                            format!("{}: {subclass} is not an option", requirement.label),
                        )
                        .with_source(requirement.source)
                        .with_requirement(requirement.id.clone()),
                    );
                }
                Some(_) => {}
            }
            return;
        }

        let Some(choice) = find_answer(draft.choices(), requirement) else {
            if !requirement.optional {
                result.push(
                    ValidationIssue::error(
                        IssueCode::RequiredChoiceMissing,
                        format!("{}: choice missing", requirement.label),
                    )
                    .with_source(requirement.source)
                    .with_requirement(requirement.id.clone()),
                );
                result.mark_incomplete(requirement.id.clone());
            }
            return;
        };

        let mut check = SelectionCheck {
            requirement,
            result,
        };
        match (&requirement.kind, &choice.selection) {
            (RequirementKind::Skills { count, options }, Selection::Skills(chosen)) => {
                check.list(*count, chosen, options.as_deref());
            }
            (RequirementKind::Languages { count, options }, Selection::Languages(chosen)) => {
                check.list(*count, chosen, options.as_deref());
            }
            (RequirementKind::Tools { count, options }, Selection::Tools(chosen)) => {
                check.list(*count, chosen, Some(options.as_slice()));
            }
            (RequirementKind::Expertise { count }, Selection::Expertise(chosen)) => {
                check.list::<Skill>(*count, chosen, None);
            }
            (RequirementKind::FightingStyle { options }, Selection::FightingStyle(style)) => {
                check.list(1, std::slice::from_ref(style), Some(options.as_slice()));
            }
            (RequirementKind::Cantrips { count, options }, Selection::Cantrips(chosen)) => {
                check.list(*count, chosen, Some(options.as_slice()));
            }
            (
                RequirementKind::Spells {
                    level,
                    count,
                    options,
                },
                Selection::Spells {
                    level: chosen_level,
                    spells,
                },
            ) => {
                if level != chosen_level {
                    check.error(
                        IssueCode::InvalidOption,
                        format!("expects level {level} spells, got level {chosen_level}"),
                    );
                }
                check.list(*count, spells, Some(options.as_slice()));
            }
            (RequirementKind::Traits { count, options }, Selection::Traits(chosen)) => {
                check.list(*count, chosen, Some(options.as_slice()));
            }
            (
                RequirementKind::AbilityIncreases {
                    points,
                    max_per_ability,
                    excluded,
                },
                Selection::AbilityIncreases(increases),
            ) => {
                let mut total: i32 = 0;
                for (ability, amount) in increases {
                    if excluded.contains(ability) {
                        check.error(
                            IssueCode::InvalidOption,
                            format!("{ability} cannot be increased here"),
                        );
                    }
                    if *amount <= 0 || *amount as u8 > *max_per_ability {
                        check.error(
                            IssueCode::InvalidOption,
                            format!(
                                "{ability} increase of {amount} must be between 1 and {max_per_ability}"
                            ),
                        );
                    }
                    total += i32::from(*amount);
                }
                check.count(usize::try_from(total).unwrap_or(0), usize::from(*points));
            }
            (RequirementKind::Equipment { options }, Selection::Equipment { option, items }) => {
                if self.settings.equipment_validation == EquipmentValidation::Eager {
                    match options.iter().find(|o| &o.id == option) {
                        Some(equipment) => self.check_equipment(equipment, items, &mut check),
                        None => check.error(
                            IssueCode::UnknownEquipment,
                            format!("option {option} is not offered"),
                        ),
                    }
                }
            }
            // Answers are matched by category, so the variants always line up.
            _ => {}
        }
    }

    fn check_equipment(
        &self,
        option: &EquipmentOption,
        items: &[ItemId],
        check: &mut SelectionCheck<'_, '_>,
    ) {
        for grant in &option.items {
            for missing in self.unknown_items(grant) {
                check.error(
                    IssueCode::UnknownEquipment,
                    format!("option {} grants unknown item {missing}", option.id),
                );
            }
        }

        check.count(items.len(), option.pick_count());

        let mut remaining: Vec<u8> = option.picks.iter().map(|p| p.count).collect();
        for item in items {
            let Some(data) = self.ruleset.item(item) else {
                check.error(
                    IssueCode::UnknownEquipment,
                    format!("unknown item {item}"),
                );
                continue;
            };
            for missing in self.unknown_items(&ItemGrant::one(item.clone())) {
                check.error(
                    IssueCode::UnknownEquipment,
                    format!("pack {item} holds unknown item {missing}"),
                );
            }
            let slot = option
                .picks
                .iter()
                .zip(remaining.iter_mut())
                .find(|(pick, left)| **left > 0 && pick.filter.matches(&data));
            match slot {
                Some((_, left)) => *left -= 1,
                None => check.error(
                    IssueCode::InvalidOption,
                    format!("{item} does not fit any open slot of option {}", option.id),
                ),
            }
        }
    }

    /// Starting equipment the class and background hand out on their own.
    fn check_granted_equipment(
        &self,
        grants: &[(GrantSource, AutomaticGrants)],
        result: &mut ValidationResult,
    ) {
        for (source, granted) in grants {
            let choice_source = source.choice_source();
            if !matches!(choice_source, ChoiceSource::Class | ChoiceSource::Background) {
                continue;
            }
            for grant in &granted.equipment {
                for missing in self.unknown_items(grant) {
                    result.push(
                        ValidationIssue::error(
                            IssueCode::UnknownEquipment,
                            format!("{source} grants unknown item {missing}"),
                        )
                        .with_source(choice_source),
                    );
                }
            }
        }
    }

    /// Item ids a grant resolves to that the ruleset cannot find. Packs are
    /// opened, since their contents are looked up when the inventory is built.
    fn unknown_items(&self, grant: &ItemGrant) -> Vec<ItemId> {
        let Some(item) = self.ruleset.item(&grant.item) else {
            return vec![grant.item.clone()];
        };
        match item.kind {
            ItemKind::Pack { contents } => contents
                .into_iter()
                .filter(|content| self.ruleset.item(&content.item).is_none())
                .map(|content| content.item)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Choices that answer no requirement at all.
    fn check_unexpected(
        &self,
        draft: &Draft,
        requirements: &Requirements,
        result: &mut ValidationResult,
    ) {
        for choice in draft.choices() {
            if choice.category().is_core() {
                continue;
            }
            let answered = requirements.iter().any(|r| answers(choice, r));
            if !answered {
                result.push(
                    ValidationIssue::error(
                        IssueCode::UnexpectedChoice,
                        format!(
                            "no {} requirement asks for {} ({})",
                            choice.source,
                            choice.category(),
                            choice.requirement_id
                        ),
                    )
                    .with_source(choice.source)
                    .with_requirement(choice.requirement_id.clone()),
                );
            }
        }
    }

    // =========================================================================
    // Advisory checks
    // =========================================================================

    /// Picks that duplicate an innate race, subrace or background grant.
    fn check_redundancy(
        &self,
        draft: &Draft,
        grants: &[(GrantSource, AutomaticGrants)],
        result: &mut ValidationResult,
    ) {
        let innate: Vec<&(GrantSource, AutomaticGrants)> = grants
            .iter()
            .filter(|(source, _)| {
                matches!(
                    source,
                    GrantSource::Race(_) | GrantSource::Subrace(..) | GrantSource::Background(_)
                )
            })
            .collect();
        let common = LanguageId::common();

        for choice in draft.choices() {
            match &choice.selection {
                Selection::Skills(chosen) => {
                    for skill in chosen {
                        if let Some((source, _)) = innate.iter().find(|(_, g)| g.grants_skill(*skill)) {
                            result.push(redundant(choice, format!("{skill} is already granted by {source}")));
                        }
                    }
                }
                Selection::Languages(chosen) => {
                    for language in chosen {
                        if language == &common {
                            result.push(redundant(choice, format!("{language} is known by every character")));
                        } else if let Some((source, _)) =
                            innate.iter().find(|(_, g)| g.grants_language(language))
                        {
                            result.push(redundant(
                                choice,
                                format!("{language} is already granted by {source}"),
                            ));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// The same skill or language picked in two different choices.
    fn check_cross_source(&self, draft: &Draft, result: &mut ValidationResult) {
        let mut seen_skills: Vec<(Skill, &Choice)> = Vec::new();
        let mut seen_languages: Vec<(&LanguageId, &Choice)> = Vec::new();

        for choice in draft.choices() {
            match &choice.selection {
                Selection::Skills(chosen) => {
                    for skill in chosen.iter().collect::<BTreeSet<_>>() {
                        if let Some((_, earlier)) = seen_skills.iter().find(|(s, _)| s == skill) {
                            result.push(cross_source(choice, earlier, skill));
                        }
                        seen_skills.push((*skill, choice));
                    }
                }
                Selection::Languages(chosen) => {
                    for language in chosen.iter().collect::<BTreeSet<_>>() {
                        if let Some((_, earlier)) =
                            seen_languages.iter().find(|(l, _)| *l == language)
                        {
                            result.push(cross_source(choice, earlier, language));
                        }
                        seen_languages.push((language, choice));
                    }
                }
                _ => {}
            }
        }
    }

    fn check_expertise(
        &self,
        draft: &Draft,
        grants: &[(GrantSource, AutomaticGrants)],
        result: &mut ValidationResult,
    ) {
        let mut proficient: BTreeSet<Skill> = grants
            .iter()
            .flat_map(|(_, g)| g.skills.iter().copied())
            .collect();
        for choice in draft.choices_in(ChoiceCategory::Skills) {
            if let Selection::Skills(chosen) = &choice.selection {
                proficient.extend(chosen.iter().copied());
            }
        }

        for choice in draft.choices_in(ChoiceCategory::Expertise) {
            if let Selection::Expertise(chosen) = &choice.selection {
                for skill in chosen.iter().filter(|s| !proficient.contains(*s)) {
                    result.push(
                        ValidationIssue::error(
                            IssueCode::ExpertiseWithoutProficiency,
                            format!("expertise in {skill} requires proficiency in it"),
                        )
                        .with_source(choice.source)
                        .with_requirement(choice.requirement_id.clone()),
                    );
                }
            }
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Whether `choice` answers `requirement`.
fn answers(choice: &Choice, requirement: &Requirement) -> bool {
    let category = choice.category();
    if requirement.source != choice.source || requirement.category() != Some(category) {
        return false;
    }
    !category.is_keyed_by_requirement() || choice.requirement_id == requirement.id
}

/// Prefer a choice keyed to the requirement, then any of the same category.
fn find_answer<'c>(choices: &'c [Choice], requirement: &Requirement) -> Option<&'c Choice> {
    let mut candidates = choices.iter().filter(|c| answers(c, requirement));
    let first = candidates.next()?;
    if first.requirement_id == requirement.id {
        return Some(first);
    }
    Some(
        candidates
            .find(|c| c.requirement_id == requirement.id)
            .unwrap_or(first),
    )
}

fn redundant(choice: &Choice, message: String) -> ValidationIssue {
    ValidationIssue::warning(IssueCode::RedundantChoice, message)
        .with_source(choice.source)
        .with_requirement(choice.requirement_id.clone())
}

fn cross_source(choice: &Choice, earlier: &Choice, value: &impl Display) -> ValidationIssue {
    ValidationIssue::warning(
        IssueCode::CrossSourceDuplicate,
        format!(
            "{value} is chosen by both {} ({}) and {} ({})",
            earlier.source, earlier.requirement_id, choice.source, choice.requirement_id
        ),
    )
    .with_source(choice.source)
    .with_requirement(choice.requirement_id.clone())
}

/// Count and membership checks for one requirement's answer.
struct SelectionCheck<'r, 'v> {
    requirement: &'r Requirement,
    result: &'v mut ValidationResult,
}

impl SelectionCheck<'_, '_> {
    fn error(&mut self, code: IssueCode, detail: String) {
        self.result.push(
            ValidationIssue::error(code, format!("{}: {detail}", self.requirement.label))
                .with_source(self.requirement.source)
                .with_requirement(self.requirement.id.clone()),
        );
    }

    fn count(&mut self, got: usize, expected: usize) {
        if got < expected {
            self.error(IssueCode::TooFew, format!("choose {expected}, got {got}"));
        } else if got > expected {
            self.error(IssueCode::TooMany, format!("choose {expected}, got {got}"));
        }
    }

    fn list<T: PartialEq + Display>(&mut self, count: u8, chosen: &[T], allowed: Option<&[T]>) {
        for (index, value) in chosen.iter().enumerate() {
            if chosen[..index].contains(value) {
                self.error(
                    IssueCode::DuplicateSelection,
                    format!("{value} is selected more than once"),
                );
            }
        }
        self.count(chosen.len(), usize::from(count));
        if let Some(allowed) = allowed {
            for value in chosen.iter().filter(|v| !allowed.contains(v)) {
                self.error(IssueCode::InvalidOption, format!("{value} is not an option"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::DraftState;
    use crate::error::CreationError;
    use crate::test_support::{
        build_fighter, complete_fighter, fighter_choices, items, mock_ruleset,
        mock_ruleset_with_items, new_draft, now, standard_scores,
    };
    use crate::validation::Severity;
    use crate::value_objects::{Ability, AbilityScores};

    fn replace_choice(choices: &mut Vec<Choice>, replacement: Choice) {
        choices.retain(|c| !replacement.supersedes(c));
        choices.push(replacement);
    }

    fn fighter_with(replacement: Choice) -> ValidationResult {
        let ruleset = mock_ruleset();
        let mut choices = fighter_choices();
        replace_choice(&mut choices, replacement);
        build_fighter(new_draft(), &ruleset, choices).validate(&ruleset)
    }

    #[test]
    fn complete_fighter_is_optimal() {
        let ruleset = mock_ruleset();
        let result = complete_fighter(&ruleset).validate(&ruleset);

        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert!(result.incomplete.is_empty());
        assert!(result.can_finalize);
        assert!(result.is_optimal());
    }

    #[test]
    fn missing_requirement_is_an_error_and_incomplete() {
        let ruleset = mock_ruleset();
        let mut choices = fighter_choices();
        choices.retain(|c| c.requirement_id.as_str() != "fighter-skills");
        let result = build_fighter(new_draft(), &ruleset, choices).validate(&ruleset);

        let missing: Vec<_> = result.errors_with(IssueCode::RequiredChoiceMissing).collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].requirement.as_ref().map(|r| r.as_str()), Some("fighter-skills"));
        assert_eq!(missing[0].source, Some(ChoiceSource::Class));
        assert!(result.incomplete.contains(&"fighter-skills".into()));
        assert!(!result.can_finalize);
        assert!(result.can_save);
    }

    #[test]
    fn skill_count_and_membership_are_checked() {
        let result = fighter_with(Choice::skills(
            ChoiceSource::Class,
            "fighter-skills",
            [Skill::Athletics, Skill::Perception, Skill::History],
        ));
        assert!(result.has_code(IssueCode::TooMany));
        let invalid: Vec<_> = result.errors_with(IssueCode::InvalidOption).collect();
        assert_eq!(invalid.len(), 1);
        assert!(invalid[0].message.contains("history"));

        let result = fighter_with(Choice::skills(
            ChoiceSource::Class,
            "fighter-skills",
            [Skill::Athletics],
        ));
        assert!(result.has_code(IssueCode::TooFew));
        assert!(!result.can_finalize);
    }

    #[test]
    fn repeated_value_in_one_selection_is_an_error() {
        let result = fighter_with(Choice::skills(
            ChoiceSource::Class,
            "fighter-skills",
            [Skill::Athletics, Skill::Athletics],
        ));
        assert!(result.has_code(IssueCode::DuplicateSelection));
        assert!(!result.can_finalize);
    }

    #[test]
    fn skill_already_granted_by_race_is_only_a_warning() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);
        let result = draft
            .set_race(&ruleset, "elf".into(), None, vec![], now())
            .unwrap();

        let redundant: Vec<_> = result.warnings_with(IssueCode::RedundantChoice).collect();
        assert_eq!(redundant.len(), 1);
        assert_eq!(redundant[0].severity, Severity::Warning);
        assert!(redundant[0].message.contains("perception"));
        assert!(result.can_finalize);
        assert!(!result.is_optimal());
    }

    #[test]
    fn background_grant_makes_a_class_pick_redundant() {
        let ruleset = mock_ruleset();
        let mut draft = new_draft();
        draft
            .set_background(
                &ruleset,
                "acolyte".into(),
                vec![Choice::languages(
                    ChoiceSource::Background,
                    "acolyte-languages",
                    ["elvish", "dwarvish"],
                )],
                now(),
            )
            .unwrap();
        let result = draft
            .set_class(
                &ruleset,
                "cleric".into(),
                Some("life".into()),
                vec![Choice::skills(
                    ChoiceSource::Class,
                    "cleric-skills",
                    [Skill::Insight, Skill::Medicine],
                )],
                now(),
            )
            .unwrap();
        let redundant: Vec<_> = result.warnings_with(IssueCode::RedundantChoice).collect();
        assert_eq!(redundant.len(), 1);
        assert_eq!(redundant[0].message, "insight is already granted by background acolyte");
        assert!(!result.has_code(IssueCode::CrossSourceDuplicate));
    }

    #[test]
    fn choosing_common_is_redundant() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);
        let result = draft
            .set_race(
                &ruleset,
                "human".into(),
                None,
                vec![Choice::languages(ChoiceSource::Race, "human-language", ["common"])],
                now(),
            )
            .unwrap();

        assert_eq!(result.warnings_with(IssueCode::RedundantChoice).count(), 1);
        assert!(result.can_finalize);
    }

    #[test]
    fn same_language_from_two_sources_is_a_warning() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);
        let result = draft
            .set_background(
                &ruleset,
                "acolyte".into(),
                vec![Choice::languages(
                    ChoiceSource::Background,
                    "acolyte-languages",
                    ["dwarvish", "giant"],
                )],
                now(),
            )
            .unwrap();

        let duplicates: Vec<_> = result.warnings_with(IssueCode::CrossSourceDuplicate).collect();
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates[0].message.contains("dwarvish"));
        assert!(result.can_finalize);
    }

    #[test]
    fn choice_without_a_requirement_is_unexpected() {
        let ruleset = mock_ruleset();
        let mut choices = fighter_choices();
        choices.push(Choice::languages(ChoiceSource::Class, "fighter-languages", ["elvish"]));
        let result = build_fighter(new_draft(), &ruleset, choices).validate(&ruleset);

        let unexpected: Vec<_> = result.errors_with(IssueCode::UnexpectedChoice).collect();
        assert_eq!(unexpected.len(), 1);
        assert_eq!(
            unexpected[0].requirement.as_ref().map(|r| r.as_str()),
            Some("fighter-languages")
        );
    }

    #[test]
    fn expertise_requires_proficiency() {
        let ruleset = mock_ruleset();
        let mut choices = fighter_choices();
        choices.push(Choice::new(
            ChoiceSource::Class,
            "fighter-expertise",
            Selection::Expertise(vec![Skill::Acrobatics, Skill::Stealth]),
        ));
        let result = build_fighter(new_draft(), &ruleset, choices).validate(&ruleset);

        let errors: Vec<_> = result
            .errors_with(IssueCode::ExpertiseWithoutProficiency)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("stealth"));
    }

    #[test]
    fn missing_subclass_blocks_finalize() {
        let ruleset = mock_ruleset();
        let mut draft = new_draft();
        let result = draft
            .set_class(&ruleset, "cleric".into(), None, vec![], now())
            .unwrap();

        assert!(result.has_code(IssueCode::MissingSubclass));
        assert!(result.incomplete.contains(&"cleric-subclass".into()));
    }

    #[test]
    fn ability_scores_are_range_checked() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);

        let scores = standard_scores().with(Ability::Strength, 2).with(Ability::Charisma, 21);
        let result = draft
            .set_ability_scores(&ruleset, scores, Some(AbilityScoreMethod::Manual), now())
            .unwrap();
        assert!(result.has_code(IssueCode::AbilityScoreTooLow));
        assert!(result.has_code(IssueCode::AbilityScoreTooHigh));
        assert!(!result.can_finalize);
    }

    #[test]
    fn standard_array_must_match() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);

        let result = draft
            .set_ability_scores(
                &ruleset,
                standard_scores().with(Ability::Charisma, 9),
                Some(AbilityScoreMethod::Standard),
                now(),
            )
            .unwrap();
        assert!(result.has_code(IssueCode::InvalidStandardArray));

        // Any permutation is fine
        let result = draft
            .set_ability_scores(
                &ruleset,
                AbilityScores::new(8, 10, 12, 13, 14, 15),
                Some(AbilityScoreMethod::Standard),
                now(),
            )
            .unwrap();
        assert!(result.can_finalize);
    }

    #[test]
    fn point_buy_budget_and_range() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);

        // 15, 15, 15, 8, 8, 8 costs exactly 27
        let exact = AbilityScores::new(15, 15, 15, 8, 8, 8);
        let result = draft
            .set_ability_scores(&ruleset, exact, Some(AbilityScoreMethod::PointBuy), now())
            .unwrap();
        assert!(result.can_finalize, "{:?}", result.errors);

        let over = AbilityScores::new(15, 15, 15, 10, 8, 8);
        let result = draft
            .set_ability_scores(&ruleset, over, Some(AbilityScoreMethod::PointBuy), now())
            .unwrap();
        assert!(result.has_code(IssueCode::PointBuyOverBudget));

        let out_of_range = AbilityScores::uniform(8).with(Ability::Strength, 16);
        let result = draft
            .set_ability_scores(&ruleset, out_of_range, Some(AbilityScoreMethod::PointBuy), now())
            .unwrap();
        assert!(result.has_code(IssueCode::PointBuyOutOfRange));
    }

    #[test]
    fn duplicated_keys_in_a_snapshot_are_corrupt() {
        let ruleset = mock_ruleset();
        let mut state: DraftState = complete_fighter(&ruleset).to_persistable_state();
        state.choices.push(Choice::skills(
            ChoiceSource::Class,
            "fighter-skills",
            [Skill::Survival, Skill::Insight],
        ));

        let result = crate::Draft::load_from_persistable_state(state).validate(&ruleset);
        assert!(result.has_code(IssueCode::CorruptDraft));
        assert!(!result.can_save);
        assert!(!result.can_finalize);
    }

    #[test]
    fn eager_policy_checks_equipment_options() {
        let result = fighter_with(Choice::equipment(
            ChoiceSource::Class,
            "fighter-armor",
            "fighter-armor-z",
        ));
        assert!(result.has_code(IssueCode::UnknownEquipment));
        assert!(!result.can_finalize);
    }

    #[test]
    fn eager_policy_checks_pick_slots() {
        // A simple weapon does not fit a martial slot
        let result = fighter_with(Choice::equipment_with_items(
            ChoiceSource::Class,
            "fighter-weapons-primary",
            "fighter-weapons-primary-a",
            ["mace"],
        ));
        assert!(result.has_code(IssueCode::InvalidOption));

        let result = fighter_with(Choice::equipment(
            ChoiceSource::Class,
            "fighter-weapons-primary",
            "fighter-weapons-primary-b",
        ));
        assert!(result.has_code(IssueCode::TooFew));
    }

    #[test]
    fn eager_policy_opens_packs() {
        let ruleset = mock_ruleset();
        let draft = complete_fighter(&ruleset);
        let without_torches = mock_ruleset_with_items(
            items()
                .into_iter()
                .filter(|item| item.id.as_str() != "torch")
                .collect(),
        );

        let result = draft.validate(&without_torches);
        let issue = result
            .errors_with(IssueCode::UnknownEquipment)
            .next()
            .expect("pack contents are checked");
        assert!(issue.message.contains("torch"), "{}", issue.message);
        assert_eq!(issue.requirement.as_ref().map(|r| r.as_str()), Some("fighter-pack"));
        assert!(!result.can_finalize);
        assert!(matches!(
            draft.finalize(&without_torches, now()),
            Err(CreationError::NotFinalizable { .. })
        ));
    }

    #[test]
    fn eager_policy_checks_background_equipment() {
        let ruleset = mock_ruleset();
        let mut draft = complete_fighter(&ruleset);
        draft
            .set_background(
                &ruleset,
                "acolyte".into(),
                vec![Choice::languages(
                    ChoiceSource::Background,
                    "acolyte-languages",
                    ["elvish", "giant"],
                )],
                now(),
            )
            .unwrap();
        assert!(draft.validate(&ruleset).can_finalize);

        let without_symbol = mock_ruleset_with_items(
            items()
                .into_iter()
                .filter(|item| item.id.as_str() != "holy-symbol")
                .collect(),
        );
        let result = draft.validate(&without_symbol);
        let sources: Vec<_> = result
            .errors_with(IssueCode::UnknownEquipment)
            .map(|issue| issue.source)
            .collect();
        assert_eq!(sources, [Some(ChoiceSource::Background)]);
        assert!(!result.can_finalize);
    }

    #[test]
    fn deferred_policy_leaves_equipment_to_the_compiler() {
        let ruleset = mock_ruleset();
        let settings =
            CreationSettings::default().with_equipment_validation(EquipmentValidation::Deferred);
        let mut choices = fighter_choices();
        replace_choice(
            &mut choices,
            Choice::equipment(ChoiceSource::Class, "fighter-armor", "fighter-armor-z"),
        );
        let draft = build_fighter(new_draft().with_settings(settings), &ruleset, choices);

        let result = draft.validate(&ruleset);
        assert!(!result.has_code(IssueCode::UnknownEquipment));
        assert!(result.can_finalize);
    }
}
