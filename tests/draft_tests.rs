use prestacao_contas::draft::snapshot::{DraftSnapshot, blob_fingerprint};
use prestacao_contas::draft::storage::MemoryDraftStorage;
use prestacao_contas::draft::store::DraftStore;
use prestacao_contas::error::FormError;
use prestacao_contas::form::state::FormState;
use prestacao_contas::sections::empregados::add_periodo_remuneracao;
use prestacao_contas::trace::logger::TraceLogger;

// =========================================================================
// Helpers
// =========================================================================

fn sample_state() -> FormState {
    let mut state = FormState::new();
    state.set_text("emp-cpf", "12345678900");
    state.set_bool("decl-houve-contratacao", true);

    state.set_text("rem-mes", "1");
    state.set_text("rem-carga", "40");
    state.set_text("rem-bruta", "1000");
    add_periodo_remuneracao(&mut state).expect("período must stage");

    state
}

// =========================================================================
// Save / restore roundtrip
// =========================================================================

#[test]
fn restore_after_save_reproduces_the_form() {
    let tracer = TraceLogger::disabled();
    let original = sample_state();

    let mut store = DraftStore::new(MemoryDraftStorage::new());
    store.save(&original, &tracer).expect("save must succeed");

    let mut restored = FormState::new();
    let found = store.restore(&mut restored, &tracer).expect("restore must succeed");

    assert!(found, "a saved draft must be found");
    assert_eq!(original, restored, "roundtrip must reproduce the whole form");
    assert_eq!(restored.list_len("staging-periodos-list"), 1);
    assert!(restored.flag("decl-houve-contratacao"));
}

#[test]
fn restore_is_merge_by_presence() {
    let tracer = TraceLogger::disabled();
    let saved = sample_state();

    let mut store = DraftStore::new(MemoryDraftStorage::new());
    store.save(&saved, &tracer).expect("save must succeed");

    // The live form has an extra field the snapshot never saw
    let mut live = FormState::new();
    live.set_text("campo-novo", "mantido");
    live.set_text("emp-cpf", "sobrescrito");

    store.restore(&mut live, &tracer).expect("restore must succeed");

    assert_eq!(
        live.text("campo-novo"),
        "mantido",
        "keys absent from the snapshot stay untouched"
    );
    assert_eq!(
        live.text("emp-cpf"),
        "12345678900",
        "keys present in the snapshot overwrite the live value"
    );
}

#[test]
fn restore_without_draft_reports_absent() {
    let tracer = TraceLogger::disabled();
    let store = DraftStore::new(MemoryDraftStorage::new());

    let mut state = FormState::new();
    let found = store.restore(&mut state, &tracer).expect("load must succeed");
    assert!(!found, "no draft means no restore");
    assert_eq!(state, FormState::new(), "state untouched");
}

#[test]
fn corrupted_blob_applies_nothing() {
    let tracer = TraceLogger::disabled();
    let mut storage = MemoryDraftStorage::new();
    storage.blob = Some("{not json".to_string());

    let store = DraftStore::new(storage);
    let mut state = FormState::new();
    state.set_text("campo", "intacto");

    let err = store.restore(&mut state, &tracer).unwrap_err();
    assert!(matches!(err, FormError::SnapshotCorrupted { .. }));
    assert_eq!(state.text("campo"), "intacto", "no partial restore applied");
}

// =========================================================================
// Storage failure and clear
// =========================================================================

#[test]
fn save_failure_is_reported_not_retried() {
    let tracer = TraceLogger::disabled();
    let mut store = DraftStore::new(MemoryDraftStorage::failing());

    let err = store.save(&sample_state(), &tracer).unwrap_err();
    assert!(matches!(err, FormError::Storage { .. }));
    assert!(!store.exists(), "failed save leaves no blob behind");
}

#[test]
fn clear_removes_the_single_blob() {
    let tracer = TraceLogger::disabled();
    let mut store = DraftStore::new(MemoryDraftStorage::new());

    store.save(&sample_state(), &tracer).expect("save");
    assert!(store.exists());

    store.clear(&tracer).expect("clear");
    assert!(!store.exists(), "absent after clear");
}

// =========================================================================
// Autosave guard
// =========================================================================

#[test]
fn autosave_never_creates_the_first_draft() {
    let tracer = TraceLogger::disabled();
    let mut store = DraftStore::new(MemoryDraftStorage::new());

    store.autosave_tick(&sample_state(), &tracer);
    assert!(
        !store.exists(),
        "autosave must not promote 'no draft' to an empty draft"
    );
}

#[test]
fn autosave_updates_an_existing_draft() {
    let tracer = TraceLogger::disabled();
    let mut store = DraftStore::new(MemoryDraftStorage::new());

    let mut state = sample_state();
    store.save(&state, &tracer).expect("explicit save first");

    state.set_text("emp-cpf", "99988877766");
    store.autosave_tick(&state, &tracer);

    let mut restored = FormState::new();
    store.restore(&mut restored, &tracer).expect("restore");
    assert_eq!(
        restored.text("emp-cpf"),
        "99988877766",
        "autosave must persist the newer form"
    );
}

#[test]
fn autosave_failure_is_silent() {
    let tracer = TraceLogger::disabled();

    let mut storage = MemoryDraftStorage::failing();
    storage.blob = Some(
        DraftSnapshot::capture(&sample_state())
            .to_blob()
            .expect("blob"),
    );
    let mut store = DraftStore::new(storage);

    // Must not panic or propagate; the failure only reaches the trace log.
    store.autosave_tick(&FormState::new(), &tracer);
}

// =========================================================================
// Fingerprinting
// =========================================================================

#[test]
fn fingerprint_tracks_content() {
    let a = blob_fingerprint("abc");
    let b = blob_fingerprint("abc");
    let c = blob_fingerprint("abd");

    assert_eq!(a, b, "same blob, same fingerprint");
    assert_ne!(a, c, "different blob, different fingerprint");
    assert_eq!(a.len(), 40, "hex-encoded SHA-1");
}
