use super::*;

fn demo_user() -> AuthUser {
    AuthUser { id: 7, email: "demo@example.com".into(), name: "Demo".into() }
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

#[test]
fn fresh_store_is_empty() {
    let store = ClientStore::in_memory();
    assert!(store.persisted_user().is_none());
    assert!(!store.keep_logged_in());
    assert!(!store.token_present());
}

#[test]
fn save_session_round_trip() {
    let store = ClientStore::in_memory();
    store.save_session(&demo_user(), true, "tok-1").unwrap();

    assert_eq!(store.persisted_user(), Some(demo_user()));
    assert!(store.keep_logged_in());
    assert_eq!(store.cookie(AUTH_COOKIE), Some("tok-1".into()));
    assert!(store.token_present());
}

#[test]
fn clear_session_removes_everything() {
    let store = ClientStore::in_memory();
    store.save_session(&demo_user(), true, "tok-1").unwrap();
    store.clear_session().unwrap();

    assert!(store.persisted_user().is_none());
    assert!(!store.keep_logged_in());
    assert!(!store.token_present());
}

#[test]
fn clear_session_on_empty_store_is_a_noop() {
    let store = ClientStore::in_memory();
    store.clear_session().unwrap();
    assert!(!store.token_present());
}

#[test]
fn saving_again_replaces_the_cookie_value() {
    let store = ClientStore::in_memory();
    store.save_session(&demo_user(), false, "tok-1").unwrap();
    store.save_session(&demo_user(), false, "tok-2").unwrap();
    assert_eq!(store.cookie(AUTH_COOKIE), Some("tok-2".into()));
}

#[test]
fn unknown_cookie_is_absent() {
    let store = ClientStore::in_memory();
    store.save_session(&demo_user(), false, "tok-1").unwrap();
    assert_eq!(store.cookie("theme"), None);
}

// =============================================================================
// FILE BACKEND
// =============================================================================

#[test]
fn file_backend_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let store = ClientStore::open(dir.path()).unwrap();
    store.save_session(&demo_user(), true, "tok-1").unwrap();
    drop(store);

    let reopened = ClientStore::open(dir.path()).unwrap();
    assert_eq!(reopened.persisted_user(), Some(demo_user()));
    assert!(reopened.keep_logged_in());
    assert_eq!(reopened.cookie(AUTH_COOKIE), Some("tok-1".into()));
}

#[test]
fn file_backend_clear_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let store = ClientStore::open(dir.path()).unwrap();
    store.save_session(&demo_user(), true, "tok-1").unwrap();
    store.clear_session().unwrap();
    drop(store);

    let reopened = ClientStore::open(dir.path()).unwrap();
    assert!(reopened.persisted_user().is_none());
    assert!(!reopened.token_present());
}

#[test]
fn corrupt_state_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("state.json"), b"not json").unwrap();

    let err = ClientStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));
}

#[test]
fn missing_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClientStore::open(dir.path()).unwrap();
    assert!(store.persisted_user().is_none());
}
