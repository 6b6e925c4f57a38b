//! Identifier sanitation and the on-disk path scheme.

use std::path::PathBuf;

use super::RecordStore;

/// Characters that cannot appear in a storage path component.
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Map a free-text patient identifier to a filesystem-safe token.
///
/// Total and deterministic: every path-unsafe character becomes `_`, all
/// other characters pass through, and applying the function twice changes
/// nothing. Two distinct raw identifiers can collide after sanitation; that
/// is an accepted constraint of the storage scheme, not something this
/// function masks. The result is used for paths only, never for display.
pub fn sanitize_patient_id(raw: &str) -> String {
    raw.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

impl RecordStore {
    /// Directory holding one patient's files: `<root>/patient_<sanitized>`.
    pub fn patient_dir(&self, patient_id: &str) -> PathBuf {
        self.root()
            .join(format!("patient_{}", sanitize_patient_id(patient_id)))
    }

    /// The patient's record document:
    /// `<root>/patient_<sanitized>/patient_<sanitized>.json`.
    pub fn record_path(&self, patient_id: &str) -> PathBuf {
        self.patient_dir(patient_id)
            .join(format!("patient_{}.json", sanitize_patient_id(patient_id)))
    }
}
