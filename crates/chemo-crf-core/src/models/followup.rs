//! Final follow-up section model (terminal outcome record).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::options::{ComorbidityTag, VitalStatus};

/// Recurrence-free survival and outcomes captured at the final follow-up
/// visit. Written in full on every save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalFollowupData {
    pub patient_id: String,
    pub last_review_date: Option<NaiveDate>,
    /// Free-text description of the patient's general condition
    pub general_condition: String,
    /// Whether the patient came back for follow-up
    pub followup_attendance: Option<bool>,
    /// Reason when the patient did not attend
    pub no_followup_reason: Option<String>,
    pub comorbidities_developed: Vec<ComorbidityTag>,
    /// Elaboration when the `Other` tag is selected
    pub other_comorbidity: Option<String>,
    /// Whether breast cancer recurrence was detected
    pub recurrence: Option<bool>,
    /// Date recurrence was confirmed
    pub recurrence_date: Option<NaiveDate>,
    pub patient_status: Option<VitalStatus>,
    /// Date of death, when deceased
    pub death_date: Option<NaiveDate>,
    /// Primary cause of death, when deceased
    pub death_cause: Option<String>,
}

impl FinalFollowupData {
    /// Whether the record reports the patient deceased.
    pub fn is_deceased(&self) -> bool {
        self.patient_status == Some(VitalStatus::Deceased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::samples::complete_followup;

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let followup = complete_followup("WMJ11");
        let json = serde_json::to_string(&followup).unwrap();
        let parsed: FinalFollowupData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, followup);
    }

    #[test]
    fn test_deceased_flag() {
        let mut followup = complete_followup("WMJ11");
        assert!(!followup.is_deceased());

        followup.patient_status = Some(VitalStatus::Deceased);
        assert!(followup.is_deceased());
    }

    #[test]
    fn test_unanswered_conditionals_stay_null() {
        let followup = complete_followup("WMJ11");
        let json: serde_json::Value = serde_json::to_value(&followup).unwrap();
        assert!(json.get("recurrence_date").unwrap().is_null());
        assert!(json.get("death_date").unwrap().is_null());
        assert!(json.get("death_cause").unwrap().is_null());
    }
}
