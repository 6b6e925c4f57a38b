//! Operator session: the entry lifecycle state machine.
//!
//! One `Session` tracks where in the baseline → cycles → final follow-up
//! sequence the operator is, and drives the full pass for each action:
//! validate, save, then advance. The session is an explicit object handed to
//! the renderer — there is no ambient mutable state — and it is disposable:
//! persisted storage is the source of truth, so a session can be dropped and
//! recreated at any time without losing data. In particular the next cycle
//! number is recomputed from storage on every transition into `CycleIdle`,
//! never tracked independently in memory.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{BaselineData, CycleData, FinalFollowupData};
use crate::store::{RecordStore, Section, StoreError};
use crate::validate::{self, ValidationError};

/// Lifecycle stage the operator is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No patient open; the baseline form is the only way forward
    AwaitingBaseline,
    /// Baseline done; choose the next cycle or the final follow-up
    CycleIdle,
    /// Entering treatment cycle `n`
    CycleActive(u32),
    /// Entering the final follow-up visit
    FinalFollowup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingBaseline => f.write_str("awaiting-baseline"),
            Self::CycleIdle => f.write_str("cycle-idle"),
            Self::CycleActive(n) => write!(f, "cycle-active({})", n),
            Self::FinalFollowup => f.write_str("final-followup"),
        }
    }
}

/// Session errors. Validation and storage failures leave the stage (and
/// storage) exactly as they were so the operator can correct and retry.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{action} is not available in the {stage} stage")]
    WrongStage {
        action: &'static str,
        stage: Stage,
    },

    #[error("cycle form is for cycle {form} but cycle {open} is open")]
    CycleMismatch { form: u32, open: u32 },
}

/// Result of a successful section save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Where the patient document was written
    pub location: PathBuf,
    /// Stage the session advanced to
    pub stage: Stage,
}

/// The operator's entry session.
///
/// Invariant: a patient is bound exactly when the stage is past
/// `AwaitingBaseline`.
#[derive(Debug)]
pub struct Session {
    stage: Stage,
    patient_id: Option<String>,
}

impl Session {
    /// Start a fresh session, ready for a new patient's baseline.
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingBaseline,
            patient_id: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The patient currently open, if any.
    pub fn patient_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    /// Save the baseline section and open the patient.
    ///
    /// With `treatment_started = No` the record is closed immediately: the
    /// session returns to `AwaitingBaseline` and no cycle is ever offered
    /// unless the baseline is resaved with treatment started.
    pub fn save_baseline(
        &mut self,
        store: &RecordStore,
        data: BaselineData,
    ) -> Result<SaveOutcome, SessionError> {
        if self.stage != Stage::AwaitingBaseline {
            return Err(SessionError::WrongStage {
                action: "save baseline",
                stage: self.stage,
            });
        }

        validate::validate_baseline(&data)?;

        let patient_id = data.patient_id.clone();
        let closes = data.closes_record();
        let location = store.save(&patient_id, Section::Baseline(data))?;

        if closes {
            tracing::debug!(patient = %patient_id, "baseline saved, treatment not started; record closed");
            self.reset();
        } else {
            tracing::debug!(patient = %patient_id, "baseline saved; cycles open");
            self.patient_id = Some(patient_id);
            self.stage = Stage::CycleIdle;
        }

        Ok(SaveOutcome {
            location,
            stage: self.stage,
        })
    }

    /// Open the next treatment cycle.
    ///
    /// The number offered is always `persisted cycle count + 1`, recomputed
    /// from storage, so it stays correct even when the session was recreated
    /// mid-flow.
    pub fn open_next_cycle(&mut self, store: &RecordStore) -> Result<u32, SessionError> {
        let patient_id = self.require_patient("open next cycle")?;
        if self.stage != Stage::CycleIdle {
            return Err(SessionError::WrongStage {
                action: "open next cycle",
                stage: self.stage,
            });
        }

        let next = store.cycle_count(&patient_id)? as u32 + 1;
        self.stage = Stage::CycleActive(next);
        tracing::debug!(patient = %patient_id, cycle = next, "cycle opened");
        Ok(next)
    }

    /// Save the open treatment cycle and return to `CycleIdle`.
    pub fn save_cycle(
        &mut self,
        store: &RecordStore,
        data: CycleData,
    ) -> Result<SaveOutcome, SessionError> {
        let patient_id = self.require_patient("save cycle")?;
        let open = match self.stage {
            Stage::CycleActive(n) => n,
            _ => {
                return Err(SessionError::WrongStage {
                    action: "save cycle",
                    stage: self.stage,
                })
            }
        };
        if data.cycle_number != open {
            return Err(SessionError::CycleMismatch {
                form: data.cycle_number,
                open,
            });
        }

        validate::validate_cycle(&data)?;

        let location = store.save(&patient_id, Section::Cycle(data))?;
        self.stage = Stage::CycleIdle;
        tracing::debug!(patient = %patient_id, cycle = open, "cycle saved");

        Ok(SaveOutcome {
            location,
            stage: self.stage,
        })
    }

    /// Discard the open cycle's transient form state. Storage is untouched.
    pub fn cancel_cycle(&mut self) -> Result<(), SessionError> {
        match self.stage {
            Stage::CycleActive(_) => {
                self.stage = Stage::CycleIdle;
                Ok(())
            }
            stage => Err(SessionError::WrongStage {
                action: "cancel cycle",
                stage,
            }),
        }
    }

    /// Move from cycle management to the final follow-up form.
    pub fn open_final_followup(&mut self) -> Result<(), SessionError> {
        if self.stage != Stage::CycleIdle {
            return Err(SessionError::WrongStage {
                action: "open final follow-up",
                stage: self.stage,
            });
        }
        self.stage = Stage::FinalFollowup;
        Ok(())
    }

    /// Return from the final follow-up form to cycle management.
    pub fn back_to_cycles(&mut self) -> Result<(), SessionError> {
        if self.stage != Stage::FinalFollowup {
            return Err(SessionError::WrongStage {
                action: "back to cycles",
                stage: self.stage,
            });
        }
        self.stage = Stage::CycleIdle;
        Ok(())
    }

    /// Save the final follow-up, completing the patient's record. The
    /// session resets for the next patient.
    pub fn save_final_followup(
        &mut self,
        store: &RecordStore,
        data: FinalFollowupData,
    ) -> Result<SaveOutcome, SessionError> {
        let patient_id = self.require_patient("save final follow-up")?;
        if self.stage != Stage::FinalFollowup {
            return Err(SessionError::WrongStage {
                action: "save final follow-up",
                stage: self.stage,
            });
        }

        validate::validate_followup(&data)?;

        let location = store.save(&patient_id, Section::FinalFollowup(data))?;
        tracing::debug!(patient = %patient_id, "final follow-up saved; record complete");
        self.reset();

        Ok(SaveOutcome {
            location,
            stage: self.stage,
        })
    }

    /// Abandon the current patient and start over. Discards transient state
    /// only; persisted storage is never touched.
    pub fn new_patient(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.stage = Stage::AwaitingBaseline;
        self.patient_id = None;
    }

    fn require_patient(&self, action: &'static str) -> Result<String, SessionError> {
        self.patient_id
            .clone()
            .ok_or(SessionError::WrongStage {
                action,
                stage: self.stage,
            })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
