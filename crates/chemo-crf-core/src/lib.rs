//! Chemo-CRF Core Library
//!
//! Single-operator data-entry core for digitizing paper chemotherapy
//! case report forms: a baseline visit, repeated treatment cycles, and a
//! final follow-up, accumulated into one JSON document per patient.
//!
//! # Architecture
//!
//! ```text
//! Form Renderer (external) ── typed section record + action
//!                                      │
//!                              [Session: lifecycle stage]
//!                                      │
//!                          Validator (first violated rule)
//!                                      │
//!                          RecordStore (read-modify-write,
//!                          merge section into the document)
//!                                      │
//!                          Session advances to next stage
//! ```
//!
//! # Core Principle
//!
//! **Storage is the source of truth.** The session is a disposable view:
//! drop it mid-flow and nothing is lost, because every derived fact (like
//! the next cycle number) is recomputed from the persisted record.
//!
//! Saves are whole-document read-modify-write, which is only safe with a
//! single operator. Two operators editing the same patient concurrently is
//! unsupported.
//!
//! # Modules
//!
//! - [`models`]: Typed section records and the merged `PatientRecord`
//! - [`store`]: JSON-document-per-patient record store
//! - [`validate`]: Ordered per-section rule tables
//! - [`session`]: The entry lifecycle state machine
//! - [`catalog`]: Fixed medication pick list and form constants
//! - [`districts`]: District lookup collaborator (degradable)
//! - [`config`]: Storage root, resolved and validated at startup

pub mod catalog;
pub mod config;
pub mod districts;
pub mod models;
pub mod session;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use config::{StoreConfig, DEFAULT_DATA_DIR};
pub use districts::DistrictList;
pub use models::{
    BaselineData, Comorbidities, CycleData, FinalFollowupData, LabResults, MedicationEntry,
    PatientRecord,
};
pub use session::{SaveOutcome, Session, SessionError, Stage};
pub use store::{sanitize_patient_id, RecordStore, Section, StoreError};
pub use validate::{validate, ValidationError};
