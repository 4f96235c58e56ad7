//! Error types for the character creation pipeline
//!
//! Recoverable problems with a player's selections never surface here; they are
//! reported as issues inside a `ValidationResult`. This type covers structural
//! input errors, missing ruleset content and terminal finalize failures.

use thiserror::Error;

use crate::ids::{ItemId, OptionId, RequirementId};

/// Unified error type for creation operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreationError {
    /// A required identifier was empty or a choice was routed to the wrong setter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The ruleset has no record for the requested content
    #[error("Content not found: {kind} with id {id}")]
    ContentNotFound { kind: &'static str, id: String },

    /// Finalize was attempted while validation still blocks it
    #[error("Draft cannot be finalized: {}", errors.join("; "))]
    NotFinalizable { errors: Vec<String> },

    /// An equipment grant named an item absent from the catalog
    #[error("Unknown item: {item}")]
    UnknownItem { item: ItemId },

    /// An equipment choice named an option its requirement does not offer
    #[error("Equipment option {option} does not belong to requirement {requirement}")]
    UnresolvedEquipment {
        requirement: RequirementId,
        option: OptionId,
    },

    /// Settings could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A persisted snapshot could not be encoded or decoded
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl CreationError {
    /// Creates an invalid input error.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(CreationError::invalid_input("character name cannot be empty"));
    /// }
    /// ```
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a content not found error
    pub fn content_not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::ContentNotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn not_finalizable(errors: Vec<String>) -> Self {
        Self::NotFinalizable { errors }
    }

    pub fn unknown_item(item: ItemId) -> Self {
        Self::UnknownItem { item }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

impl From<serde_json::Error> for CreationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}
