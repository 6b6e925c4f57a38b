//! Treatment cycle section rules.

use crate::models::CycleData;

use super::{first_violation, Rule, ValidationError};

const RULES: &[Rule<CycleData>] = &[
    Rule {
        field: "regimen_prescribed",
        message: "Please select the regimen prescribed for this cycle!",
        check: |d| d.regimen_prescribed.is_some(),
    },
    Rule {
        field: "prescription_date",
        message: "Please enter the chemotherapy prescription date!",
        check: |d| d.prescription_date.is_some(),
    },
    Rule {
        field: "medications",
        message: "Please add at least one medication!",
        check: |d| !d.medications.is_empty(),
    },
];

/// Check a completed cycle form, returning the first violated rule.
///
/// Medication entries are checked in form order after the table rules. A
/// name that is blank after trimming counts as absent — this is how an
/// unresolved "Other (specify)" selection surfaces, since the renderer hands
/// over whatever free text the operator supplied.
pub fn validate_cycle(data: &CycleData) -> Result<(), ValidationError> {
    first_violation(RULES, data)?;

    for (i, med) in data.medications.iter().enumerate() {
        if med.name.trim().is_empty() {
            return Err(ValidationError::new(
                format!("medications[{}].name", i),
                format!("Please provide a name for medication {}!", i + 1),
            ));
        }
        if med.dose.trim().is_empty() {
            return Err(ValidationError::new(
                format!("medications[{}].dose", i),
                format!("Please provide a dose for medication {}!", i + 1),
            ));
        }
    }

    Ok(())
}
