//! Record load/save operations and the per-section merge rules.

use std::fs;
use std::path::PathBuf;

use crate::models::{BaselineData, CycleData, FinalFollowupData, PatientRecord};

use super::{RecordStore, StoreError, StoreResult};

/// A section save request, carrying the complete section record.
#[derive(Debug, Clone)]
pub enum Section {
    Baseline(BaselineData),
    Cycle(CycleData),
    FinalFollowup(FinalFollowupData),
}

impl Section {
    /// The merge rule's name, for logging.
    fn kind(&self) -> &'static str {
        match self {
            Self::Baseline(_) => "baseline",
            Self::Cycle(_) => "cycle",
            Self::FinalFollowup(_) => "final_followup",
        }
    }
}

impl RecordStore {
    /// Load the persisted record for a patient.
    ///
    /// A patient that was never saved yields an empty shell, not an error.
    /// A record file that exists but cannot be read or parsed is an error:
    /// silently substituting a shell here would let the next save overwrite
    /// a document that still holds data.
    pub fn load(&self, patient_id: &str) -> StoreResult<PatientRecord> {
        let path = self.record_path(patient_id);
        if !path.exists() {
            return Ok(PatientRecord::empty_shell(patient_id));
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::ReadRecord {
            path: path.clone(),
            source,
        })?;
        let record = serde_json::from_str(&contents)
            .map_err(|source| StoreError::ParseRecord { path, source })?;
        Ok(record)
    }

    /// Merge one section into the patient's document and write it back.
    ///
    /// Creates the patient directory if absent, loads the existing record
    /// (or an empty shell), applies the section's merge rule — full replace
    /// for baseline and final follow-up, upsert-by-cycle_number for cycles —
    /// and rewrites the complete document. Returns the document path.
    pub fn save(&self, patient_id: &str, section: Section) -> StoreResult<PathBuf> {
        let patient_dir = self.patient_dir(patient_id);
        fs::create_dir_all(&patient_dir).map_err(|source| StoreError::CreateDir {
            path: patient_dir.clone(),
            source,
        })?;

        let mut record = self.load(patient_id)?;
        let kind = section.kind();
        match section {
            Section::Baseline(baseline) => record.baseline_data = Some(baseline),
            Section::Cycle(cycle) => record.upsert_cycle(cycle),
            Section::FinalFollowup(followup) => record.final_followup = Some(followup),
        }

        let path = self.record_path(patient_id);
        let contents = serde_json::to_string_pretty(&record)?;
        fs::write(&path, contents).map_err(|source| StoreError::WriteRecord {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(section = kind, path = %path.display(), "record section saved");
        Ok(path)
    }

    /// Number of cycles persisted for a patient. Recomputed from storage so
    /// the lifecycle machine stays consistent even after a session reset.
    pub fn cycle_count(&self, patient_id: &str) -> StoreResult<usize> {
        Ok(self.load(patient_id)?.treatment_cycles.len())
    }

    /// Number of patient directories under the storage root. Degrades to 0
    /// when the root does not exist or cannot be listed.
    pub fn patient_count(&self) -> usize {
        let entries = match fs::read_dir(self.root()) {
            Ok(entries) => entries,
            Err(_) => return 0,
        };
        entries
            .flatten()
            .filter(|e| {
                e.path().is_dir()
                    && e.file_name()
                        .to_string_lossy()
                        .starts_with("patient_")
            })
            .count()
    }
}
