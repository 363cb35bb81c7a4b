//! Sign-in page.
//!
//! On success the token is stored, the auth state flips to logged-in, and
//! navigation returns to the `next` query parameter when the user was
//! redirected here by the route guard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::error::{ApiError, FieldErrors};
use crate::state::auth::{self, AuthState};

/// Demo credentials, matching the guest account seeded on the backend.
const GUEST_EMAIL: &str = "guest@example.com";
const GUEST_PASSWORD: &str = "guestpassword";

/// Map a failed login to the displayed errors. A 401 here means the
/// credentials were wrong, not that a session expired; there is no session
/// on this page yet.
fn sign_in_errors(err: ApiError) -> FieldErrors {
    match err {
        ApiError::Unauthorized => {
            FieldErrors::general_only("Invalid email or password. Please try again.")
        }
        ApiError::Validation(field_errors) => field_errors,
        other => FieldErrors::general_only(other.to_string()),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<FieldErrors>);
    let submitting = RwSignal::new(false);

    let submit_credentials = move |email_value: String, password_value: String| {
        submitting.set(true);
        errors.set(None);
        let navigate = navigate.clone();
        let next = query.get_untracked().get("next").unwrap_or_else(|| "/".to_owned());
        leptos::task::spawn_local(async move {
            match api::sign_in(&email_value, &password_value).await {
                Ok(response) => {
                    if let Some(token) = response.into_token() {
                        auth::complete_sign_in(auth, &token);
                        navigate(&next, NavigateOptions::default());
                    } else {
                        let _ = errors.try_set(Some(FieldErrors::general_only(
                            "Sign-in succeeded but no token was returned.",
                        )));
                        let _ = submitting.try_set(false);
                    }
                }
                Err(err) => {
                    let _ = errors.try_set(Some(sign_in_errors(err)));
                    let _ = submitting.try_set(false);
                }
            }
        });
    };

    let on_submit = {
        let submit_credentials = submit_credentials.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            submit_credentials(email.get_untracked(), password.get_untracked());
        }
    };

    let on_guest = {
        let submit_credentials = submit_credentials.clone();
        move |_| {
            email.set(GUEST_EMAIL.to_owned());
            password.set(GUEST_PASSWORD.to_owned());
            submit_credentials(GUEST_EMAIL.to_owned(), GUEST_PASSWORD.to_owned());
        }
    };

    let field_error = move |name: &'static str| errors.get().and_then(|e| e.field(name));
    let general_error = move || errors.get().and_then(|e| e.general());

    view! {
        <div class="auth-page">
            <form class="card auth-page__card" on:submit=on_submit>
                <h2>"Welcome Back"</h2>
                <p class="auth-page__subtitle">"Sign in to continue to Blood Bank Management"</p>

                {move || {
                    general_error()
                        .map(|message| {
                            view! { <div class="alert alert--error" role="alert">{message}</div> }
                        })
                }}

                <label class="form-field">
                    "Email Address"
                    <input
                        type="email"
                        name="email"
                        placeholder="Enter your email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || {
                        field_error("email")
                            .map(|message| view! { <span class="form-field__error">{message}</span> })
                    }}
                </label>

                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        name="password"
                        placeholder="Enter your password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || {
                        field_error("password")
                            .map(|message| view! { <span class="form-field__error">{message}</span> })
                    }}
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <button
                    class="btn"
                    type="button"
                    on:click=on_guest
                    disabled=move || submitting.get()
                >
                    "Sign In as Guest"
                </button>

                <p class="auth-page__switch">
                    "Don't have an account? " <a href="/sign-up">"Sign Up"</a>
                </p>
            </form>
        </div>
    }
}
