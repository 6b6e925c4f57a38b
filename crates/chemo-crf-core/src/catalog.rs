//! Fixed medication pick list and form-level constants.
//!
//! The paper case report form offers a closed list of chemotherapy and
//! supportive-care medications; anything else is entered as free text via
//! the "Other (specify)" option. The catalog here is the source of truth a
//! renderer presents and the membership check consumers use to tell catalog
//! entries from free-text names.

use chrono::NaiveDate;

/// Medications offered on the cycle form pick list.
pub const MEDICATIONS: &[&str] = &[
    "Adriamycin",
    "Cyclophosphamide",
    "Doxorubicin",
    "Dexamethasone",
    "5-fluorouracil",
    "Ondansetron",
    "Ranitidine",
    "Metoclopramide",
    "Plasil",
    "Ifosfamide",
    "Mesna",
    "Paclitaxel",
    "Epirubicin",
    "Carboplatin",
    "Capecitabine (Xeloda)",
    "Docetaxel",
    "Promethazine",
    "Tamoxifen",
    "Anastrazole",
];

/// Check whether a medication name is on the fixed pick list.
///
/// Matching is case-insensitive; free-text "Other" entries return false.
pub fn is_listed_medication(name: &str) -> bool {
    let name = name.trim();
    MEDICATIONS.iter().any(|m| m.eq_ignore_ascii_case(name))
}

/// First admission date accepted by the study.
pub const STUDY_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2016, 1, 1) {
    Some(d) => d,
    None => panic!("invalid study start date"),
};

/// Last date accepted by the study.
pub const STUDY_END_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(d) => d,
    None => panic!("invalid study end date"),
};

/// Widget bounds for laboratory inputs: white-cell count.
pub const WBC_RANGE: (f64, f64) = (0.0, 50_000.0);
/// Widget bounds for laboratory inputs: hemoglobin (g/dL).
pub const HEMOGLOBIN_RANGE: (f64, f64) = (0.0, 25.0);
/// Widget bounds for laboratory inputs: platelet count.
pub const PLATELETS_RANGE: (u32, u32) = (0, 1_000_000);
