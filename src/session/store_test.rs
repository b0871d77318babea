use super::*;
use crate::session::persist::MemoryBackend;
use crate::session::state::UserType;

fn dan() -> UserProfile {
    UserProfile {
        name: "dan".to_owned(),
        user_type: UserType::Student,
    }
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn restore_with_no_record_is_logged_out() {
    let store = SessionStore::restore(MemoryBackend::new());
    assert!(!store.is_logged_in());
    assert!(store.user().is_none());
    assert!(store.token().is_none());
}

#[test]
fn restore_with_malformed_record_falls_back_to_default() {
    let store = SessionStore::restore(MemoryBackend::with_record("{not json"));
    assert!(!store.is_logged_in());
    assert!(store.user().is_none());
    assert!(store.token().is_none());
}

#[test]
fn restore_with_valid_record_recovers_the_session() {
    let backend = MemoryBackend::new();
    let mut store = SessionStore::restore(backend.clone());
    store.set_token("abc".to_owned());
    store.set_user(dan());
    store.set_logged_in(true);

    let restored = SessionStore::restore(backend);
    assert!(restored.is_logged_in());
    assert_eq!(restored.user(), Some(&dan()));
    assert_eq!(restored.token(), Some("abc"));
}

// =============================================================
// Mutations persist the whole record
// =============================================================

#[test]
fn every_mutation_commits_to_the_backend() {
    let backend = MemoryBackend::new();
    let mut store = SessionStore::restore(backend.clone());

    store.set_logged_in(true);
    let after_flag = backend.record().unwrap();
    assert!(after_flag.contains("\"logged_in\":true"));

    store.set_token("abc".to_owned());
    let after_token = backend.record().unwrap();
    assert!(after_token.contains("abc"));
    assert!(after_token.contains("\"logged_in\":true"));

    store.set_user(dan());
    let after_user = backend.record().unwrap();
    assert!(after_user.contains("dan"));
}

#[test]
fn setters_overwrite_exactly_one_field() {
    let mut store = SessionStore::restore(MemoryBackend::new());
    store.set_token("abc".to_owned());
    assert!(!store.is_logged_in());
    assert!(store.user().is_none());

    store.set_logged_in(true);
    assert_eq!(store.token(), Some("abc"));
    assert!(store.user().is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_all_fields_and_commits_once() {
    let backend = MemoryBackend::new();
    let mut store = SessionStore::restore(backend.clone());
    store.set_logged_in(true);
    store.set_user(dan());
    store.set_token("abc".to_owned());

    store.logout();
    assert!(!store.is_logged_in());
    assert!(store.user().is_none());
    assert!(store.token().is_none());

    let record = backend.record().unwrap();
    assert!(record.contains("\"logged_in\":false"));
    assert!(!record.contains("abc"));
}

#[test]
fn logout_is_idempotent() {
    let backend = MemoryBackend::new();
    let mut store = SessionStore::restore(backend.clone());
    store.set_logged_in(true);
    store.set_token("abc".to_owned());

    store.logout();
    let once = backend.record();
    store.logout();
    let twice = backend.record();

    assert_eq!(once, twice);
    assert!(!store.is_logged_in());
}

// Token without the login flag is allowed; the guard only reads the flag.
#[test]
fn token_can_be_set_while_logged_out() {
    let mut store = SessionStore::restore(MemoryBackend::new());
    store.set_token("orphan".to_owned());
    assert!(!store.is_logged_in());
    assert_eq!(store.token(), Some("orphan"));
}
