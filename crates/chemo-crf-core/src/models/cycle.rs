//! Treatment cycle section model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog;

use super::options::{DoseUnit, PatientCondition, Regimen, SideEffect};

/// One chemotherapy treatment cycle.
///
/// `cycle_number` is caller-supplied and keys the upsert into
/// `PatientRecord::treatment_cycles`; saving an existing number updates that
/// entry in place, never duplicates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleData {
    pub cycle_number: u32,
    pub patient_id: String,
    pub regimen_prescribed: Option<Regimen>,
    pub prescription_date: Option<NaiveDate>,
    pub medications: Vec<MedicationEntry>,
    /// Date chemotherapy was actually received
    pub chemo_received_date: Option<NaiveDate>,
    pub laboratory: LabResults,
    /// Whether chemotherapy was received on the day of prescription
    pub chemo_on_prescription_day: Option<bool>,
    /// Reason when receipt was delayed
    pub chemo_delay_reason: Option<String>,
    pub side_effects_present: Option<bool>,
    /// Side effect tags, only meaningful when side effects are present
    pub side_effects: Vec<SideEffect>,
    /// Elaboration when the `Other` tag is selected
    pub side_effects_other: Option<String>,
    pub patient_condition: Option<PatientCondition>,
    /// Elaboration when the condition is `Other`
    pub condition_other: Option<String>,
    /// Hospitalization between this cycle and the previous one
    pub hospitalization: Option<bool>,
    /// Reason when hospitalized
    pub hospitalization_reason: Option<String>,
}

/// A single medication administered during a cycle.
///
/// `name` is either an entry from the fixed catalog or free text resolved
/// from the renderer's "Other (specify)" input. The dose is kept as the
/// operator typed it (paper forms mix numerals, ranges, and annotations).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationEntry {
    pub name: String,
    pub dose: String,
    pub unit: DoseUnit,
}

impl MedicationEntry {
    /// Whether the name comes from the fixed catalog (as opposed to a
    /// free-text "Other" entry).
    pub fn is_catalog_entry(&self) -> bool {
        catalog::is_listed_medication(&self.name)
    }
}

/// Laboratory results captured before the cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabResults {
    /// Total white-cell count
    pub wbc: f64,
    /// Hemoglobin (g/dL)
    pub hemoglobin: f64,
    /// Platelet count
    pub platelets: u32,
}
