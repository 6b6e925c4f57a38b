//! Domain models for the captured record and its sections.

mod baseline;
mod cycle;
mod followup;
mod options;
mod record;

pub use baseline::*;
pub use cycle::*;
pub use followup::*;
pub use options::*;
pub use record::*;

/// Fully answered sample sections shared by unit tests across the crate.
#[cfg(test)]
pub(crate) mod samples {
    use chrono::NaiveDate;

    use super::*;

    pub fn complete_baseline(patient_id: &str) -> BaselineData {
        BaselineData {
            patient_id: patient_id.into(),
            age: 47,
            date_admitted: NaiveDate::from_ymd_opt(2017, 1, 9).unwrap(),
            education_level: Some(EducationLevel::Secondary),
            marital_status: Some(MaritalStatus::Married),
            income_source: Some(IncomeSource::Farmer),
            income_other: None,
            district: Some("Kampala".into()),
            initial_diagnosis: Some(Diagnosis::InvasiveDuctalCarcinoma),
            immunohisto_present: Some(false),
            immunohisto_results: vec![],
            immunohisto_other: None,
            disease_stage: Some(DiseaseStage::StageII),
            comorbidities: Comorbidities::default(),
            chemo_cycles_prescribed: 6,
            regimen_prescribed: Some(Regimen::Ac),
            treatment_started: Some(true),
            treatment_not_started_reason: None,
            treatment_not_started_other: None,
        }
    }

    pub fn complete_cycle(patient_id: &str, cycle_number: u32) -> CycleData {
        CycleData {
            cycle_number,
            patient_id: patient_id.into(),
            regimen_prescribed: Some(Regimen::Ac),
            prescription_date: NaiveDate::from_ymd_opt(2017, 7, 1),
            medications: vec![
                MedicationEntry {
                    name: "Doxorubicin".into(),
                    dose: "60".into(),
                    unit: DoseUnit::MgPerM2,
                },
                MedicationEntry {
                    name: "Cyclophosphamide".into(),
                    dose: "600".into(),
                    unit: DoseUnit::MgPerM2,
                },
            ],
            chemo_received_date: NaiveDate::from_ymd_opt(2017, 7, 1),
            laboratory: LabResults {
                wbc: 4200.0,
                hemoglobin: 11.8,
                platelets: 230_000,
            },
            chemo_on_prescription_day: Some(true),
            chemo_delay_reason: None,
            side_effects_present: Some(true),
            side_effects: vec![SideEffect::Nausea, SideEffect::Fatigue],
            side_effects_other: None,
            patient_condition: Some(PatientCondition::Better),
            condition_other: None,
            hospitalization: Some(false),
            hospitalization_reason: None,
        }
    }

    pub fn complete_followup(patient_id: &str) -> FinalFollowupData {
        FinalFollowupData {
            patient_id: patient_id.into(),
            last_review_date: NaiveDate::from_ymd_opt(2018, 3, 20),
            general_condition: "Stable, no complaints".into(),
            followup_attendance: Some(true),
            no_followup_reason: None,
            comorbidities_developed: vec![ComorbidityTag::NoneCaptured],
            other_comorbidity: None,
            recurrence: Some(false),
            recurrence_date: None,
            patient_status: Some(VitalStatus::Alive),
            death_date: None,
            death_cause: None,
        }
    }
}
