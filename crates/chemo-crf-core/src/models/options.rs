//! Fixed answer options for the form sections.
//!
//! Every closed question on the case report form is an enum here. Serde
//! representations use the exact labels printed on the paper form so the
//! persisted JSON matches the documents produced by earlier versions of the
//! tool. `ALL` gives renderers the presentation order; `as_str` gives the
//! label without a serializer round-trip.

use serde::{Deserialize, Serialize};

/// Highest level of education (baseline question 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    None,
    Primary,
    Secondary,
    Tertiary,
    #[serde(rename = "Not captured")]
    NotCaptured,
}

impl EducationLevel {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::NotCaptured,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
            Self::NotCaptured => "Not captured",
        }
    }
}

/// Current marital status (baseline question 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    #[serde(rename = "Not captured")]
    NotCaptured,
}

impl MaritalStatus {
    pub const ALL: [Self; 5] = [
        Self::Single,
        Self::Married,
        Self::Divorced,
        Self::Widowed,
        Self::NotCaptured,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
            Self::NotCaptured => "Not captured",
        }
    }
}

/// Main source of income (baseline question 5). `Other` carries a free-text
/// elaboration in `BaselineData::income_other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeSource {
    Farmer,
    Business,
    Professional,
    Unemployed,
    Other,
}

impl IncomeSource {
    pub const ALL: [Self; 5] = [
        Self::Farmer,
        Self::Business,
        Self::Professional,
        Self::Unemployed,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Business => "Business",
            Self::Professional => "Professional",
            Self::Unemployed => "Unemployed",
            Self::Other => "Other",
        }
    }
}

/// Initial histological diagnosis (baseline question 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnosis {
    #[serde(rename = "Invasive ductal carcinoma")]
    InvasiveDuctalCarcinoma,
    #[serde(rename = "Moderately differentiated invasive ductal carcinoma")]
    ModeratelyDifferentiatedInvasiveDuctalCarcinoma,
    #[serde(rename = "Moderately differentiated ductal carcinoma")]
    ModeratelyDifferentiatedDuctalCarcinoma,
    #[serde(rename = "Ductal carcinoma in situ")]
    DuctalCarcinomaInSitu,
    #[serde(rename = "Infiltrating carcinoma")]
    InfiltratingCarcinoma,
    #[serde(rename = "Poorly differentiated adenocarcinoma")]
    PoorlyDifferentiatedAdenocarcinoma,
    #[serde(rename = "Invasive adenocarcinoma")]
    InvasiveAdenocarcinoma,
    #[serde(rename = "Invasive lobular carcinoma")]
    InvasiveLobularCarcinoma,
    Other,
}

impl Diagnosis {
    pub const ALL: [Self; 9] = [
        Self::InvasiveDuctalCarcinoma,
        Self::ModeratelyDifferentiatedInvasiveDuctalCarcinoma,
        Self::ModeratelyDifferentiatedDuctalCarcinoma,
        Self::DuctalCarcinomaInSitu,
        Self::InfiltratingCarcinoma,
        Self::PoorlyDifferentiatedAdenocarcinoma,
        Self::InvasiveAdenocarcinoma,
        Self::InvasiveLobularCarcinoma,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvasiveDuctalCarcinoma => "Invasive ductal carcinoma",
            Self::ModeratelyDifferentiatedInvasiveDuctalCarcinoma => {
                "Moderately differentiated invasive ductal carcinoma"
            }
            Self::ModeratelyDifferentiatedDuctalCarcinoma => {
                "Moderately differentiated ductal carcinoma"
            }
            Self::DuctalCarcinomaInSitu => "Ductal carcinoma in situ",
            Self::InfiltratingCarcinoma => "Infiltrating carcinoma",
            Self::PoorlyDifferentiatedAdenocarcinoma => "Poorly differentiated adenocarcinoma",
            Self::InvasiveAdenocarcinoma => "Invasive adenocarcinoma",
            Self::InvasiveLobularCarcinoma => "Invasive lobular carcinoma",
            Self::Other => "Other",
        }
    }
}

/// Disease stage at first diagnosis (baseline question 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseStage {
    #[serde(rename = "Stage 0")]
    Stage0,
    #[serde(rename = "Stage I")]
    StageI,
    #[serde(rename = "Stage II")]
    StageII,
    #[serde(rename = "Stage III")]
    StageIII,
    #[serde(rename = "Stage IV")]
    StageIV,
}

impl DiseaseStage {
    pub const ALL: [Self; 5] = [
        Self::Stage0,
        Self::StageI,
        Self::StageII,
        Self::StageIII,
        Self::StageIV,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stage0 => "Stage 0",
            Self::StageI => "Stage I",
            Self::StageII => "Stage II",
            Self::StageIII => "Stage III",
            Self::StageIV => "Stage IV",
        }
    }
}

/// Immunohistochemistry result tags (baseline question 8, multi-select).
/// `Other` carries a free-text elaboration in
/// `BaselineData::immunohisto_other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImmunohistoResult {
    #[serde(rename = "ER-positive (ER+)")]
    ErPositive,
    #[serde(rename = "ER-negative (ER-)")]
    ErNegative,
    #[serde(rename = "PR-positive (PR+)")]
    PrPositive,
    #[serde(rename = "PR-negative (PR-)")]
    PrNegative,
    #[serde(rename = "HR-positive (HR+)")]
    HrPositive,
    #[serde(rename = "HR-negative (HR-)")]
    HrNegative,
    #[serde(rename = "HER2-positive (HER2+)")]
    Her2Positive,
    #[serde(rename = "HER2-negative (HER2-)")]
    Her2Negative,
    Other,
}

impl ImmunohistoResult {
    pub const ALL: [Self; 9] = [
        Self::ErPositive,
        Self::ErNegative,
        Self::PrPositive,
        Self::PrNegative,
        Self::HrPositive,
        Self::HrNegative,
        Self::Her2Positive,
        Self::Her2Negative,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ErPositive => "ER-positive (ER+)",
            Self::ErNegative => "ER-negative (ER-)",
            Self::PrPositive => "PR-positive (PR+)",
            Self::PrNegative => "PR-negative (PR-)",
            Self::HrPositive => "HR-positive (HR+)",
            Self::HrNegative => "HR-negative (HR-)",
            Self::Her2Positive => "HER2-positive (HER2+)",
            Self::Her2Negative => "HER2-negative (HER2-)",
            Self::Other => "Other",
        }
    }
}

/// Chemotherapy regimen (baseline question 12 and per-cycle prescription).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regimen {
    #[serde(rename = "AC (Doxorubicin + Cyclophosphamide)")]
    Ac,
    #[serde(rename = "AC-T (Doxorubicin + Cyclophosphamide + Paclitaxel)")]
    AcT,
    #[serde(rename = "CMF (Cyclophosphamide + Methotrexate + 5-Fluorouracil)")]
    Cmf,
    #[serde(rename = "FAC (5-Fluorouracil + Doxorubicin + Cyclophosphamide)")]
    Fac,
    #[serde(rename = "FEC (5-Fluorouracil + Epirubicin + Cyclophosphamide)")]
    Fec,
    #[serde(rename = "TC (Docetaxel + Cyclophosphamide)")]
    Tc,
    #[serde(rename = "TCH (Docetaxel + Carboplatin + Trastuzumab)")]
    Tch,
    #[serde(rename = "TAC (Docetaxel + Doxorubicin + Cyclophosphamide)")]
    Tac,
    #[serde(rename = "EC-T (Epirubicin + Cyclophosphamide + Paclitaxel)")]
    EcT,
    #[serde(rename = "Capecitabine (Xeloda) monotherapy")]
    CapecitabineMonotherapy,
    #[serde(rename = "Tamoxifen monotherapy")]
    TamoxifenMonotherapy,
    Other,
}

impl Regimen {
    pub const ALL: [Self; 12] = [
        Self::Ac,
        Self::AcT,
        Self::Cmf,
        Self::Fac,
        Self::Fec,
        Self::Tc,
        Self::Tch,
        Self::Tac,
        Self::EcT,
        Self::CapecitabineMonotherapy,
        Self::TamoxifenMonotherapy,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ac => "AC (Doxorubicin + Cyclophosphamide)",
            Self::AcT => "AC-T (Doxorubicin + Cyclophosphamide + Paclitaxel)",
            Self::Cmf => "CMF (Cyclophosphamide + Methotrexate + 5-Fluorouracil)",
            Self::Fac => "FAC (5-Fluorouracil + Doxorubicin + Cyclophosphamide)",
            Self::Fec => "FEC (5-Fluorouracil + Epirubicin + Cyclophosphamide)",
            Self::Tc => "TC (Docetaxel + Cyclophosphamide)",
            Self::Tch => "TCH (Docetaxel + Carboplatin + Trastuzumab)",
            Self::Tac => "TAC (Docetaxel + Doxorubicin + Cyclophosphamide)",
            Self::EcT => "EC-T (Epirubicin + Cyclophosphamide + Paclitaxel)",
            Self::CapecitabineMonotherapy => "Capecitabine (Xeloda) monotherapy",
            Self::TamoxifenMonotherapy => "Tamoxifen monotherapy",
            Self::Other => "Other",
        }
    }
}

/// Reason treatment was never started (baseline question 13 follow-on).
/// `Other` carries a free-text elaboration in
/// `BaselineData::treatment_not_started_other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotStartedReason {
    #[serde(rename = "Physical toll (fear of side effects)")]
    PhysicalToll,
    #[serde(rename = "Fear of Long-term damage")]
    FearOfLongTermDamage,
    #[serde(rename = "Financial / cost barriers")]
    FinancialBarriers,
    #[serde(rename = "Distance and access")]
    DistanceAndAccess,
    #[serde(rename = "Late diagnosis")]
    LateDiagnosis,
    #[serde(rename = "Social / family factors")]
    SocialFamilyFactors,
    #[serde(rename = "Older age, existing illnesses, or weak health")]
    OlderAgeOrWeakHealth,
    Other,
}

impl NotStartedReason {
    pub const ALL: [Self; 8] = [
        Self::PhysicalToll,
        Self::FearOfLongTermDamage,
        Self::FinancialBarriers,
        Self::DistanceAndAccess,
        Self::LateDiagnosis,
        Self::SocialFamilyFactors,
        Self::OlderAgeOrWeakHealth,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhysicalToll => "Physical toll (fear of side effects)",
            Self::FearOfLongTermDamage => "Fear of Long-term damage",
            Self::FinancialBarriers => "Financial / cost barriers",
            Self::DistanceAndAccess => "Distance and access",
            Self::LateDiagnosis => "Late diagnosis",
            Self::SocialFamilyFactors => "Social / family factors",
            Self::OlderAgeOrWeakHealth => "Older age, existing illnesses, or weak health",
            Self::Other => "Other",
        }
    }
}

/// Dose unit for a medication entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseUnit {
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "mg/m2")]
    MgPerM2,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mL")]
    Ml,
    #[serde(rename = "tabs")]
    Tabs,
    #[serde(rename = "IU")]
    Iu,
}

impl DoseUnit {
    pub const ALL: [Self; 6] = [
        Self::Mg,
        Self::MgPerM2,
        Self::G,
        Self::Ml,
        Self::Tabs,
        Self::Iu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mg => "mg",
            Self::MgPerM2 => "mg/m2",
            Self::G => "g",
            Self::Ml => "mL",
            Self::Tabs => "tabs",
            Self::Iu => "IU",
        }
    }
}

impl Default for DoseUnit {
    fn default() -> Self {
        Self::Mg
    }
}

/// Documented side effect tags (per-cycle, multi-select). `Other` carries a
/// free-text elaboration in `CycleData::side_effects_other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffect {
    Nausea,
    Fatigue,
    Vomiting,
    Neuropathy,
    None,
    Other,
}

impl SideEffect {
    pub const ALL: [Self; 6] = [
        Self::Nausea,
        Self::Fatigue,
        Self::Vomiting,
        Self::Neuropathy,
        Self::None,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nausea => "Nausea",
            Self::Fatigue => "Fatigue",
            Self::Vomiting => "Vomiting",
            Self::Neuropathy => "Neuropathy",
            Self::None => "None",
            Self::Other => "Other",
        }
    }
}

/// General condition at the clinic visit (per-cycle). `Other` carries a
/// free-text elaboration in `CycleData::condition_other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientCondition {
    Better,
    Weaker,
    Other,
}

impl PatientCondition {
    pub const ALL: [Self; 3] = [Self::Better, Self::Weaker, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Better => "Better",
            Self::Weaker => "Weaker",
            Self::Other => "Other",
        }
    }
}

/// Comorbidities developed by the final follow-up (multi-select). `Other`
/// carries a free-text elaboration in `FinalFollowupData::other_comorbidity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComorbidityTag {
    Diabetes,
    Hypertension,
    #[serde(rename = "HIV")]
    Hiv,
    #[serde(rename = "None captured")]
    NoneCaptured,
    Other,
}

impl ComorbidityTag {
    pub const ALL: [Self; 5] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::Hiv,
        Self::NoneCaptured,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::Hiv => "HIV",
            Self::NoneCaptured => "None captured",
            Self::Other => "Other",
        }
    }
}

/// Vital status at last follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VitalStatus {
    Alive,
    Deceased,
}

impl VitalStatus {
    pub const ALL: [Self; 2] = [Self::Alive, Self::Deceased];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Deceased => "Deceased",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_form_labels() {
        let json = serde_json::to_string(&EducationLevel::NotCaptured).unwrap();
        assert_eq!(json, "\"Not captured\"");

        let json = serde_json::to_string(&Regimen::Ac).unwrap();
        assert_eq!(json, "\"AC (Doxorubicin + Cyclophosphamide)\"");

        let json = serde_json::to_string(&ImmunohistoResult::Her2Positive).unwrap();
        assert_eq!(json, "\"HER2-positive (HER2+)\"");
    }

    #[test]
    fn test_as_str_matches_serde_label() {
        for stage in DiseaseStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
        for regimen in Regimen::ALL {
            let json = serde_json::to_string(&regimen).unwrap();
            assert_eq!(json, format!("\"{}\"", regimen.as_str()));
        }
        for reason in NotStartedReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }

    #[test]
    fn test_round_trip_through_label() {
        let parsed: DoseUnit = serde_json::from_str("\"mg/m2\"").unwrap();
        assert_eq!(parsed, DoseUnit::MgPerM2);

        let parsed: ComorbidityTag = serde_json::from_str("\"HIV\"").unwrap();
        assert_eq!(parsed, ComorbidityTag::Hiv);

        let parsed: VitalStatus = serde_json::from_str("\"Deceased\"").unwrap();
        assert_eq!(parsed, VitalStatus::Deceased);
    }
}
