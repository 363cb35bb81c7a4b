use super::*;

// =============================================================
// Tri-state transitions
// =============================================================

#[test]
fn auth_state_starts_unknown_with_no_user() {
    let state = AuthState::default();
    assert_eq!(state.status, LoginStatus::Unknown);
    assert!(state.user.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn bootstrap_resolves_from_credential_presence() {
    let mut state = AuthState::default();
    state.bootstrap(true);
    assert_eq!(state.status, LoginStatus::LoggedIn);

    let mut state = AuthState::default();
    state.bootstrap(false);
    assert_eq!(state.status, LoginStatus::LoggedOut);
}

#[test]
fn signed_in_flips_state_without_touching_profile() {
    let mut state = AuthState {
        status: LoginStatus::LoggedOut,
        user: Some(User::default()),
    };
    state.signed_in();
    assert!(state.is_logged_in());
    assert!(state.user.is_some());
}

#[test]
fn signed_out_clears_profile() {
    let mut state = AuthState {
        status: LoginStatus::LoggedIn,
        user: Some(User {
            username: "jdoe".to_owned(),
            ..User::default()
        }),
    };
    state.signed_out();
    assert_eq!(state.status, LoginStatus::LoggedOut);
    assert!(state.user.is_none());
}

#[test]
fn signed_out_is_idempotent() {
    // Repeated 401s must not error or change anything further.
    let mut state = AuthState::default();
    state.signed_out();
    let after_first = state.clone();
    state.signed_out();
    assert_eq!(state.status, after_first.status);
    assert!(state.user.is_none());
}

// =============================================================
// Profile accessors
// =============================================================

#[test]
fn blood_group_requires_loaded_profile() {
    let mut state = AuthState {
        status: LoginStatus::LoggedIn,
        user: None,
    };
    assert_eq!(state.blood_group(), None);

    state.user = Some(User {
        blood_group: Some("O+".to_owned()),
        ..User::default()
    });
    assert_eq!(state.blood_group().as_deref(), Some("O+"));

    state.user = Some(User::default());
    assert_eq!(state.blood_group(), None);
}
