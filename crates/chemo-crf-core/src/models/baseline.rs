//! Baseline section model (collected at first visit only).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::options::{
    Diagnosis, DiseaseStage, EducationLevel, ImmunohistoResult, IncomeSource, MaritalStatus,
    NotStartedReason, Regimen,
};

/// Baseline data for a patient's first visit.
///
/// Fields answered with a Yes/No widget are `Option<bool>`; `None` means the
/// operator has not answered yet. Conditional elaborations (`income_other`,
/// `immunohisto_other`, ...) are `None` whenever their parent branch is not
/// taken. Every baseline save writes this record in full.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaselineData {
    /// Operator-supplied patient identifier (raw, unsanitized)
    pub patient_id: String,
    /// Age in years; 0 means unanswered
    pub age: u32,
    /// Admission date, within the study window
    pub date_admitted: NaiveDate,
    pub education_level: Option<EducationLevel>,
    pub marital_status: Option<MaritalStatus>,
    pub income_source: Option<IncomeSource>,
    /// Elaboration when income source is `Other`
    pub income_other: Option<String>,
    /// District of residence, from the external lookup list
    pub district: Option<String>,
    pub initial_diagnosis: Option<Diagnosis>,
    /// Whether immunohistochemistry results are present
    pub immunohisto_present: Option<bool>,
    /// Result tags, only meaningful when results are present
    pub immunohisto_results: Vec<ImmunohistoResult>,
    /// Elaboration when the `Other` tag is selected
    pub immunohisto_other: Option<String>,
    pub disease_stage: Option<DiseaseStage>,
    pub comorbidities: Comorbidities,
    /// Number of chemotherapy cycles prescribed; 0 means unanswered
    pub chemo_cycles_prescribed: u32,
    pub regimen_prescribed: Option<Regimen>,
    /// Whether the patient started treatment
    pub treatment_started: Option<bool>,
    /// Reason when treatment was not started
    pub treatment_not_started_reason: Option<NotStartedReason>,
    /// Elaboration when the reason is `Other`
    pub treatment_not_started_other: Option<String>,
}

/// Fixed comorbidity flags captured at baseline (question 10).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comorbidities {
    pub diabetes: bool,
    pub hypertension: bool,
    pub hiv: bool,
    pub none_captured: bool,
    pub other: bool,
    /// Elaboration when `other` is set
    pub other_specify: Option<String>,
}

impl BaselineData {
    /// Whether this record closes data collection for the patient (treatment
    /// never started).
    pub fn closes_record(&self) -> bool {
        self.treatment_started == Some(false)
    }
}
