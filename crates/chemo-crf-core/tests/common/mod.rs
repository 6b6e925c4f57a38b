//! Shared builders for the integration suites: fully answered sections, as
//! a renderer would assemble them.

use chrono::NaiveDate;

use chemo_crf_core::models::*;

pub fn baseline(patient_id: &str) -> BaselineData {
    BaselineData {
        patient_id: patient_id.into(),
        age: 52,
        date_admitted: NaiveDate::from_ymd_opt(2016, 11, 3).unwrap(),
        education_level: Some(EducationLevel::Primary),
        marital_status: Some(MaritalStatus::Widowed),
        income_source: Some(IncomeSource::Business),
        income_other: None,
        district: Some("Mbarara".into()),
        initial_diagnosis: Some(Diagnosis::InvasiveLobularCarcinoma),
        immunohisto_present: Some(true),
        immunohisto_results: vec![
            ImmunohistoResult::ErPositive,
            ImmunohistoResult::Her2Negative,
        ],
        immunohisto_other: None,
        disease_stage: Some(DiseaseStage::StageIII),
        comorbidities: Comorbidities {
            hypertension: true,
            ..Comorbidities::default()
        },
        chemo_cycles_prescribed: 8,
        regimen_prescribed: Some(Regimen::Fac),
        treatment_started: Some(true),
        treatment_not_started_reason: None,
        treatment_not_started_other: None,
    }
}

pub fn cycle(patient_id: &str, cycle_number: u32) -> CycleData {
    CycleData {
        cycle_number,
        patient_id: patient_id.into(),
        regimen_prescribed: Some(Regimen::Fac),
        prescription_date: NaiveDate::from_ymd_opt(2017, 2, 14),
        medications: vec![MedicationEntry {
            name: "5-fluorouracil".into(),
            dose: "500".into(),
            unit: DoseUnit::MgPerM2,
        }],
        chemo_received_date: NaiveDate::from_ymd_opt(2017, 2, 15),
        laboratory: LabResults {
            wbc: 5600.0,
            hemoglobin: 12.4,
            platelets: 310_000,
        },
        chemo_on_prescription_day: Some(false),
        chemo_delay_reason: Some("Pharmacy stock-out".into()),
        side_effects_present: Some(false),
        side_effects: vec![],
        side_effects_other: None,
        patient_condition: Some(PatientCondition::Better),
        condition_other: None,
        hospitalization: Some(false),
        hospitalization_reason: None,
    }
}

pub fn followup(patient_id: &str) -> FinalFollowupData {
    FinalFollowupData {
        patient_id: patient_id.into(),
        last_review_date: NaiveDate::from_ymd_opt(2018, 9, 30),
        general_condition: "Recovered well, back to work".into(),
        followup_attendance: Some(true),
        no_followup_reason: None,
        comorbidities_developed: vec![ComorbidityTag::Hypertension],
        other_comorbidity: None,
        recurrence: Some(false),
        recurrence_date: None,
        patient_status: Some(VitalStatus::Alive),
        death_date: None,
        death_cause: None,
    }
}
