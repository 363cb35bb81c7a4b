//! Authentication state: the session tri-state plus the current profile.
//!
//! The tri-state starts `Unknown` until the stored credential has been
//! checked; the route guard renders nothing while it is `Unknown`. Plain
//! network errors never change the state; only sign-in/sign-up, sign-out,
//! and a 401 do.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::session;

/// Whether a session is known to exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    /// The stored credential has not been checked yet.
    #[default]
    Unknown,
    LoggedIn,
    LoggedOut,
}

/// Session tri-state and the current user profile.
///
/// The profile is fetched by consuming pages, never by the state itself, so
/// pages that do not need it cause no extra request.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub status: LoginStatus,
    pub user: Option<User>,
}

impl AuthState {
    /// Resolve the initial tri-state from the presence of a stored credential.
    pub fn bootstrap(&mut self, has_credential: bool) {
        self.status = if has_credential {
            LoginStatus::LoggedIn
        } else {
            LoginStatus::LoggedOut
        };
    }

    /// A sign-in or sign-up succeeded; the credential is already stored.
    pub fn signed_in(&mut self) {
        self.status = LoginStatus::LoggedIn;
    }

    /// Enter the logged-out state, dropping the profile. Idempotent.
    pub fn signed_out(&mut self) {
        self.status = LoginStatus::LoggedOut;
        self.user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.status == LoginStatus::LoggedIn
    }

    /// The profile's blood group, if the profile is loaded and has one.
    pub fn blood_group(&self) -> Option<String> {
        self.user.as_ref().and_then(|user| user.blood_group.clone())
    }
}

/// Store the credential and flip the tri-state to logged-in.
pub fn complete_sign_in(auth: RwSignal<AuthState>, token: &str) {
    session::set(token);
    let _ = auth.try_update(AuthState::signed_in);
}

/// Treat the session as expired: clear the credential and enter the
/// logged-out state. Called on sign-out and whenever any API call reports a
/// 401; repeated calls are harmless.
pub fn expire_session(auth: RwSignal<AuthState>) {
    session::clear();
    let _ = auth.try_update(AuthState::signed_out);
}
