//! Draft validation
//!
//! Errors block finalize, warnings are advisory, and `incomplete` lists the
//! requirement keys still waiting for an answer.

mod result;
mod validator;

pub use result::{IssueCode, Severity, ValidationIssue, ValidationResult};
pub use validator::Validator;
