//! Baseline section rules.

use crate::models::{BaselineData, ImmunohistoResult, IncomeSource, NotStartedReason};

use super::{filled, first_violation, Rule, ValidationError};

/// Ordered baseline rules. Conditional-branch rules sit directly after the
/// field that opens their branch.
const RULES: &[Rule<BaselineData>] = &[
    Rule {
        field: "patient_id",
        message: "Patient ID is required!",
        check: |d| !d.patient_id.trim().is_empty(),
    },
    Rule {
        field: "age",
        message: "Please enter a valid age!",
        check: |d| d.age > 0,
    },
    Rule {
        field: "patient_id",
        message: "Patient ID must be at least 3 characters long!",
        check: |d| d.patient_id.trim().chars().count() >= 3,
    },
    Rule {
        field: "education_level",
        message: "Please select an education level!",
        check: |d| d.education_level.is_some(),
    },
    Rule {
        field: "marital_status",
        message: "Please select a marital status!",
        check: |d| d.marital_status.is_some(),
    },
    Rule {
        field: "income_source",
        message: "Please select an income source!",
        check: |d| d.income_source.is_some(),
    },
    Rule {
        field: "income_other",
        message: "Please specify the other source of income!",
        check: |d| d.income_source != Some(IncomeSource::Other) || filled(&d.income_other),
    },
    Rule {
        field: "district",
        message: "Please select a district!",
        check: |d| filled(&d.district),
    },
    Rule {
        field: "initial_diagnosis",
        message: "Please select an initial diagnosis!",
        check: |d| d.initial_diagnosis.is_some(),
    },
    Rule {
        field: "immunohisto_present",
        message: "Please select if immunohistochemistry results are present!",
        check: |d| d.immunohisto_present.is_some(),
    },
    Rule {
        field: "immunohisto_other",
        message: "Please specify the other immunohistochemistry results!",
        check: |d| {
            !d.immunohisto_results.contains(&ImmunohistoResult::Other)
                || filled(&d.immunohisto_other)
        },
    },
    Rule {
        field: "disease_stage",
        message: "Please select a disease stage!",
        check: |d| d.disease_stage.is_some(),
    },
    Rule {
        field: "comorbidities.other_specify",
        message: "Please specify the other comorbidities!",
        check: |d| !d.comorbidities.other || filled(&d.comorbidities.other_specify),
    },
    Rule {
        field: "chemo_cycles_prescribed",
        message: "Please enter the number of chemotherapy cycles prescribed!",
        check: |d| d.chemo_cycles_prescribed > 0,
    },
    Rule {
        field: "regimen_prescribed",
        message: "Please select a prescribed regimen!",
        check: |d| d.regimen_prescribed.is_some(),
    },
    Rule {
        field: "treatment_started",
        message: "Please select if the patient started treatment!",
        check: |d| d.treatment_started.is_some(),
    },
    Rule {
        field: "treatment_not_started_reason",
        message: "Please select why treatment was not started!",
        check: |d| d.treatment_started != Some(false) || d.treatment_not_started_reason.is_some(),
    },
    Rule {
        field: "treatment_not_started_other",
        message: "Please specify the other reason treatment was not started!",
        check: |d| {
            d.treatment_not_started_reason != Some(NotStartedReason::Other)
                || filled(&d.treatment_not_started_other)
        },
    },
];

/// Check a completed baseline form, returning the first violated rule.
pub fn validate_baseline(data: &BaselineData) -> Result<(), ValidationError> {
    first_violation(RULES, data)
}
