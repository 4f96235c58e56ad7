use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::RequirementId;
use crate::value_objects::ChoiceSource;

/// Stable machine-readable issue codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    RequiredChoiceMissing,
    TooFew,
    TooMany,
    InvalidOption,
    DuplicateSelection,
    RedundantChoice,
    CrossSourceDuplicate,
    UnexpectedChoice,
    ExpertiseWithoutProficiency,
    AbilityScoreTooLow,
    AbilityScoreTooHigh,
    InvalidStandardArray,
    PointBuyOutOfRange,
    PointBuyOverBudget,
    UnknownEquipment,
    MissingSubclass,
    CorruptDraft,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            IssueCode::RequiredChoiceMissing => "required_choice_missing",
            IssueCode::TooFew => "too_few",
            IssueCode::TooMany => "too_many",
            IssueCode::InvalidOption => "invalid_option",
            IssueCode::DuplicateSelection => "duplicate_selection",
            IssueCode::RedundantChoice => "redundant_choice",
            IssueCode::CrossSourceDuplicate => "cross_source_duplicate",
            IssueCode::UnexpectedChoice => "unexpected_choice",
            IssueCode::ExpertiseWithoutProficiency => "expertise_without_proficiency",
            IssueCode::AbilityScoreTooLow => "ability_score_too_low",
            IssueCode::AbilityScoreTooHigh => "ability_score_too_high",
            IssueCode::InvalidStandardArray => "invalid_standard_array",
            IssueCode::PointBuyOutOfRange => "point_buy_out_of_range",
            IssueCode::PointBuyOverBudget => "point_buy_over_budget",
            IssueCode::UnknownEquipment => "unknown_equipment",
            IssueCode::MissingSubclass => "missing_subclass",
            IssueCode::CorruptDraft => "corrupt_draft",
        };
        f.write_str(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks finalize
    Error,
    /// Advisory only
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub severity: Severity,
    /// Source of the offending choice or requirement
    pub source: Option<ChoiceSource>,
    pub requirement: Option<RequirementId>,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            source: None,
            requirement: None,
            message: message.into(),
        }
    }

    pub fn warning(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    pub fn with_source(mut self, source: ChoiceSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_requirement(mut self, requirement: RequirementId) -> Self {
        self.requirement = Some(requirement);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Outcome of validating a draft.
///
/// Errors block finalize, warnings never do. `incomplete` lists requirement
/// keys still waiting for a choice, including the core steps (`name`, `race`,
/// `class`, `background`, `ability_scores`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub incomplete: Vec<RequirementId>,
    pub can_save: bool,
    pub can_finalize: bool,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            incomplete: Vec::new(),
            can_save: true,
            can_finalize: true,
        }
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    pub(crate) fn mark_incomplete(&mut self, requirement: RequirementId) {
        if !self.incomplete.contains(&requirement) {
            self.incomplete.push(requirement);
        }
    }

    /// Compute the two gates from the collected issues.
    pub(crate) fn finish(mut self) -> Self {
        self.can_save = !self
            .errors
            .iter()
            .any(|issue| issue.code == IssueCode::CorruptDraft);
        self.can_finalize = self.errors.is_empty() && self.incomplete.is_empty();
        self
    }

    /// No warnings either.
    pub fn is_optimal(&self) -> bool {
        self.can_finalize && self.warnings.is_empty()
    }

    pub fn has_code(&self, code: IssueCode) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|issue| issue.code == code)
    }

    pub fn warnings_with(&self, code: IssueCode) -> impl Iterator<Item = &ValidationIssue> {
        self.warnings.iter().filter(move |issue| issue.code == code)
    }

    pub fn errors_with(&self, code: IssueCode) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().filter(move |issue| issue.code == code)
    }

    /// Messages suitable for a `NotFinalizable` error.
    pub fn blocking_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(ToString::to_string)
            .chain(
                self.incomplete
                    .iter()
                    .map(|key| format!("[incomplete] {key}")),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_can_finalize() {
        let result = ValidationResult::new().finish();
        assert!(result.can_save);
        assert!(result.can_finalize);
        assert!(result.is_optimal());
    }

    #[test]
    fn warnings_do_not_block_finalize() {
        let mut result = ValidationResult::new();
        result.push(ValidationIssue::warning(IssueCode::RedundantChoice, "insight twice"));
        let result = result.finish();
        assert!(result.can_finalize);
        assert!(!result.is_optimal());
    }

    #[test]
    fn incomplete_blocks_finalize_but_not_save() {
        let mut result = ValidationResult::new();
        result.mark_incomplete(RequirementId::new("name"));
        result.mark_incomplete(RequirementId::new("name"));
        let result = result.finish();
        assert_eq!(result.incomplete.len(), 1);
        assert!(result.can_save);
        assert!(!result.can_finalize);
        assert_eq!(result.blocking_messages(), vec!["[incomplete] name"]);
    }

    #[test]
    fn only_corruption_blocks_save() {
        let mut result = ValidationResult::new();
        result.push(ValidationIssue::error(IssueCode::TooFew, "choose 2 skills"));
        assert!(result.clone().finish().can_save);

        result.push(ValidationIssue::error(IssueCode::CorruptDraft, "duplicate choice"));
        let result = result.finish();
        assert!(!result.can_save);
        assert!(!result.can_finalize);
    }
}
