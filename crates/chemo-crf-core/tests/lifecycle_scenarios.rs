//! End-to-end lifecycle scenarios, driven through the public session API the
//! way a renderer would.

mod common;

use chemo_crf_core::models::{NotStartedReason, VitalStatus};
use chemo_crf_core::{RecordStore, Session, SessionError, Stage, StoreConfig};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> RecordStore {
    let config = StoreConfig::new(dir.path());
    RecordStore::open(&config).unwrap()
}

#[test]
fn scenario_a_treatment_not_started_never_offers_cycles() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let mut session = Session::new();

    let mut baseline = common::baseline("UCI-001");
    baseline.treatment_started = Some(false);
    baseline.treatment_not_started_reason = Some(NotStartedReason::DistanceAndAccess);

    let outcome = session.save_baseline(&store, baseline).unwrap();
    assert_eq!(outcome.stage, Stage::AwaitingBaseline);

    // No patient is open, so no cycle can be offered.
    assert!(matches!(
        session.open_next_cycle(&store),
        Err(SessionError::WrongStage { .. })
    ));

    // Resaving the baseline with treatment started reopens the flow.
    let mut session = Session::new();
    let baseline = common::baseline("UCI-001");
    let outcome = session.save_baseline(&store, baseline).unwrap();
    assert_eq!(outcome.stage, Stage::CycleIdle);
    assert_eq!(session.open_next_cycle(&store).unwrap(), 1);
}

#[test]
fn scenario_b_cycle_numbers_survive_session_restart() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let mut session = Session::new();
    session
        .save_baseline(&store, common::baseline("UCI-002"))
        .unwrap();
    assert_eq!(session.open_next_cycle(&store).unwrap(), 1);
    session
        .save_cycle(&store, common::cycle("UCI-002", 1))
        .unwrap();

    // Process restart: a new session over the same store. The operator
    // re-enters the baseline, then the next cycle offered is 2, computed
    // from the persisted record rather than any in-memory counter.
    drop(session);
    let store = open_store(&dir);
    let mut session = Session::new();
    session
        .save_baseline(&store, common::baseline("UCI-002"))
        .unwrap();
    assert_eq!(session.open_next_cycle(&store).unwrap(), 2);
}

#[test]
fn scenario_c_deceased_without_cause_is_rejected_in_place() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let mut session = Session::new();
    session
        .save_baseline(&store, common::baseline("UCI-003"))
        .unwrap();
    session.open_final_followup().unwrap();

    let mut followup = common::followup("UCI-003");
    followup.patient_status = Some(VitalStatus::Deceased);
    followup.death_date = chrono::NaiveDate::from_ymd_opt(2018, 4, 11);
    followup.death_cause = None;

    let err = session.save_final_followup(&store, followup).unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));

    // Record unchanged, lifecycle still on the follow-up form.
    assert_eq!(session.stage(), Stage::FinalFollowup);
    assert!(store.load("UCI-003").unwrap().final_followup.is_none());

    // Supplying the cause lets the same pass succeed and reset the session.
    let mut followup = common::followup("UCI-003");
    followup.patient_status = Some(VitalStatus::Deceased);
    followup.death_date = chrono::NaiveDate::from_ymd_opt(2018, 4, 11);
    followup.death_cause = Some("Disease progression".into());

    let outcome = session.save_final_followup(&store, followup).unwrap();
    assert_eq!(outcome.stage, Stage::AwaitingBaseline);
}

#[test]
fn full_patient_journey_accumulates_one_document() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let mut session = Session::new();

    session
        .save_baseline(&store, common::baseline("UCI-004"))
        .unwrap();

    for expected in 1..=3 {
        let n = session.open_next_cycle(&store).unwrap();
        assert_eq!(n, expected);
        session
            .save_cycle(&store, common::cycle("UCI-004", n))
            .unwrap();
    }

    session.open_final_followup().unwrap();
    session.back_to_cycles().unwrap();
    session.open_final_followup().unwrap();
    session
        .save_final_followup(&store, common::followup("UCI-004"))
        .unwrap();

    let record = store.load("UCI-004").unwrap();
    assert!(record.baseline_data.is_some());
    assert_eq!(record.treatment_cycles.len(), 3);
    assert!(record.final_followup.is_some());

    // Session is ready for the next patient; the previous record persists.
    assert_eq!(session.stage(), Stage::AwaitingBaseline);
    session
        .save_baseline(&store, common::baseline("UCI-005"))
        .unwrap();
    assert_eq!(store.patient_count(), 2);
}

#[test]
fn cancelled_cycle_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let mut session = Session::new();
    session
        .save_baseline(&store, common::baseline("UCI-006"))
        .unwrap();

    session.open_next_cycle(&store).unwrap();
    session.cancel_cycle().unwrap();

    assert_eq!(store.cycle_count("UCI-006").unwrap(), 0);
    assert_eq!(session.open_next_cycle(&store).unwrap(), 1);
}

#[test]
fn new_patient_mid_cycle_abandons_only_transient_state() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let mut session = Session::new();
    session
        .save_baseline(&store, common::baseline("UCI-007"))
        .unwrap();
    session.open_next_cycle(&store).unwrap();
    session
        .save_cycle(&store, common::cycle("UCI-007", 1))
        .unwrap();
    session.open_next_cycle(&store).unwrap();

    // Operator abandons cycle 2 entry and switches patients.
    session.new_patient();
    assert_eq!(session.stage(), Stage::AwaitingBaseline);

    let record = store.load("UCI-007").unwrap();
    assert!(record.baseline_data.is_some());
    assert_eq!(record.treatment_cycles.len(), 1);
}
