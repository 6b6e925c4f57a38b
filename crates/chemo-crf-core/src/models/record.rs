//! The merged per-patient document.

use serde::{Deserialize, Serialize};

use super::baseline::BaselineData;
use super::cycle::CycleData;
use super::followup::FinalFollowupData;

/// The complete persisted record for one patient.
///
/// The record accumulates across independent entry sessions: baseline first,
/// then any number of treatment cycles, then the final follow-up. Baseline
/// and final follow-up are replaced wholesale on save; cycles are upserted
/// by `cycle_number`. Unset sections serialize as explicit `null` so
/// downstream consumers can rely on key presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Operator-supplied identifier (raw; sanitization happens at the
    /// storage layer only)
    pub patient_id: String,
    pub baseline_data: Option<BaselineData>,
    /// Ordered by first save; unique by `cycle_number`
    pub treatment_cycles: Vec<CycleData>,
    pub final_followup: Option<FinalFollowupData>,
}

impl PatientRecord {
    /// Create the empty shell a never-seen patient starts from.
    pub fn empty_shell(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            baseline_data: None,
            treatment_cycles: Vec::new(),
            final_followup: None,
        }
    }

    /// Look up a cycle by its number.
    pub fn cycle(&self, cycle_number: u32) -> Option<&CycleData> {
        self.treatment_cycles
            .iter()
            .find(|c| c.cycle_number == cycle_number)
    }

    /// Insert or update a cycle, keyed by `cycle_number`.
    ///
    /// An existing entry is replaced in place, keeping its position in the
    /// list; a new number is appended. Each save carries the cycle's full
    /// field set, so replacement and a shallow field update are the same
    /// operation.
    pub fn upsert_cycle(&mut self, cycle: CycleData) {
        match self
            .treatment_cycles
            .iter_mut()
            .find(|c| c.cycle_number == cycle.cycle_number)
        {
            Some(existing) => *existing = cycle,
            None => self.treatment_cycles.push(cycle),
        }
    }

    /// The cycle number `CycleIdle` offers next: count of saved cycles + 1.
    pub fn next_cycle_number(&self) -> u32 {
        self.treatment_cycles.len() as u32 + 1
    }

    /// Whether any section has been saved yet.
    pub fn is_empty_shell(&self) -> bool {
        self.baseline_data.is_none()
            && self.treatment_cycles.is_empty()
            && self.final_followup.is_none()
    }
}
