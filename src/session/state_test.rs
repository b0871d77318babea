use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_logged_out() {
    let state = SessionState::default();
    assert!(!state.logged_in);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn clear_resets_all_fields() {
    let mut state = SessionState {
        logged_in: true,
        user: Some(UserProfile {
            name: "dan".to_owned(),
            user_type: UserType::Student,
        }),
        token: Some("abc".to_owned()),
    };
    state.clear();
    assert_eq!(state, SessionState::default());
}

#[test]
fn clear_on_default_is_a_no_op() {
    let mut state = SessionState::default();
    state.clear();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Serialization round trip
// =============================================================

#[test]
fn state_round_trips_through_json() {
    let state = SessionState {
        logged_in: true,
        user: Some(UserProfile {
            name: "ada".to_owned(),
            user_type: UserType::Professor,
        }),
        token: Some("tok-123".to_owned()),
    };
    let raw = serde_json::to_string(&state).unwrap();
    let back: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, state);
}

#[test]
fn default_state_round_trips_through_json() {
    let state = SessionState::default();
    let raw = serde_json::to_string(&state).unwrap();
    let back: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, state);
}

#[test]
fn user_type_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&UserType::Student).unwrap(),
        "\"student\""
    );
    assert_eq!(
        serde_json::to_string(&UserType::Professor).unwrap(),
        "\"professor\""
    );
}

#[test]
fn user_profile_uses_service_field_names() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"name":"dan","type":"student"}"#).unwrap();
    assert_eq!(profile.name, "dan");
    assert_eq!(profile.user_type, UserType::Student);
}

// Permissive by design: login writes token, user, and the flag as three
// separate calls, so a token without the flag is a reachable state.
#[test]
fn token_without_login_flag_is_representable() {
    let state = SessionState {
        logged_in: false,
        user: None,
        token: Some("orphan".to_owned()),
    };
    let raw = serde_json::to_string(&state).unwrap();
    let back: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, state);
}
