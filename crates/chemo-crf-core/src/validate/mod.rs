//! Field validation for the three form sections.
//!
//! Each section declares one ordered table of rules (field, operator-facing
//! message, predicate) and a single generic runner reports the first
//! violated rule. Check order is significant: it decides which message the
//! operator sees when several fields are missing, and it matches the order
//! the questions appear on the paper form. Validation is pure — no I/O, no
//! mutation — and every section reports the same structured error shape.

mod baseline;
mod cycle;
mod followup;

pub use baseline::validate_baseline;
pub use cycle::validate_cycle;
pub use followup::validate_followup;

use thiserror::Error;

use crate::store::Section;

/// A violated rule, attributed to the field the operator must fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field path within the section record (e.g. `medications[0].dose`)
    pub field: String,
    /// Operator-facing message
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One entry in a section's ordered rule table. `check` returns true when
/// the rule passes.
pub(crate) struct Rule<T> {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

/// Run a rule table, returning the first violation.
pub(crate) fn first_violation<T>(rules: &[Rule<T>], data: &T) -> Result<(), ValidationError> {
    for rule in rules {
        if !(rule.check)(data) {
            return Err(ValidationError::new(rule.field, rule.message));
        }
    }
    Ok(())
}

/// True when an optional free-text elaboration is present and non-blank.
pub(crate) fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Validate a section save request.
pub fn validate(section: &Section) -> Result<(), ValidationError> {
    match section {
        Section::Baseline(data) => validate_baseline(data),
        Section::Cycle(data) => validate_cycle(data),
        Section::FinalFollowup(data) => validate_followup(data),
    }
}
