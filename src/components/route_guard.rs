//! Route guard: withholds or redirects page rendering based on session state.
//!
//! The decision is a pure function of the tri-state and the current path.
//! While the state is `Unknown` nothing renders: neither the protected
//! content nor a premature redirect. Once the state resolves to logged-out on
//! a protected path, one redirect to sign-in fires, carrying the original
//! path as the `next` parameter; after that navigation the path is public and
//! the decision settles on `Render`.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{AuthState, LoginStatus};

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &["/", "/sign-in", "/sign-up"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session state not yet known: render nothing.
    Suspend,
    /// Known to be signed out on a protected path.
    RedirectToSignIn { next: String },
    Render,
}

/// Decide what to do for the given session state and path.
pub fn decide(status: LoginStatus, path: &str) -> GuardOutcome {
    match status {
        LoginStatus::Unknown => GuardOutcome::Suspend,
        LoginStatus::LoggedOut if !PUBLIC_PATHS.contains(&path) => {
            GuardOutcome::RedirectToSignIn {
                next: path.to_owned(),
            }
        }
        _ => GuardOutcome::Render,
    }
}

/// Sign-in URL preserving the originally requested path.
pub fn sign_in_url(next: &str) -> String {
    crate::util::query::filter_url("/sign-in", &[("next", next)])
}

/// Wraps the routed content and enforces the guard decision.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let outcome = decide(auth.get().status, &location.pathname.get());
        if let GuardOutcome::RedirectToSignIn { next } = outcome {
            navigate(&sign_in_url(&next), NavigateOptions::default());
        }
    });

    view! {
        {move || {
            match decide(auth.get().status, &location.pathname.get()) {
                GuardOutcome::Render => children().into_any(),
                GuardOutcome::Suspend | GuardOutcome::RedirectToSignIn { .. } => ().into_any(),
            }
        }}
    }
}
