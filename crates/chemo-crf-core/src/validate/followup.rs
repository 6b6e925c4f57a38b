//! Final follow-up section rules.

use crate::models::FinalFollowupData;

use super::{filled, first_violation, Rule, ValidationError};

const RULES: &[Rule<FinalFollowupData>] = &[
    Rule {
        field: "last_review_date",
        message: "Please enter the last recorded review date!",
        check: |d| d.last_review_date.is_some(),
    },
    Rule {
        field: "general_condition",
        message: "Please describe the patient's general condition!",
        check: |d| !d.general_condition.trim().is_empty(),
    },
    Rule {
        field: "followup_attendance",
        message: "Please select whether the patient came back for follow-up!",
        check: |d| d.followup_attendance.is_some(),
    },
    Rule {
        field: "no_followup_reason",
        message: "Please explain why the patient did not come for follow-up!",
        check: |d| d.followup_attendance != Some(false) || filled(&d.no_followup_reason),
    },
    Rule {
        field: "recurrence_date",
        message: "Please enter the date the recurrence was confirmed!",
        check: |d| d.recurrence != Some(true) || d.recurrence_date.is_some(),
    },
    Rule {
        field: "patient_status",
        message: "Please select the patient's status at last follow-up!",
        check: |d| d.patient_status.is_some(),
    },
    Rule {
        field: "death_date",
        message: "Please enter the date of death!",
        check: |d| !d.is_deceased() || d.death_date.is_some(),
    },
    Rule {
        field: "death_cause",
        message: "Please enter the primary cause of death!",
        check: |d| !d.is_deceased() || filled(&d.death_cause),
    },
];

/// Check a completed final follow-up form, returning the first violated rule.
pub fn validate_followup(data: &FinalFollowupData) -> Result<(), ValidationError> {
    first_violation(RULES, data)
}
