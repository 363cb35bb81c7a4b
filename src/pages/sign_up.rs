//! Sign-up page.
//!
//! The backend validates passwords as `password1`/`password2`; its field
//! errors are renamed back onto this form's `password`/`confirm_password`
//! fields before display.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::error::{ApiError, FieldErrors};
use crate::state::auth::{self, AuthState};

/// Map backend registration field names onto the form's own field names.
fn map_sign_up_errors(errors: FieldErrors) -> FieldErrors {
    errors
        .renamed("password1", "password")
        .renamed("password2", "confirm_password")
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<FieldErrors>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submitting.set(true);
        errors.set(None);
        let navigate = navigate.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        leptos::task::spawn_local(async move {
            match api::sign_up(&email_value, &password_value, &confirm_value).await {
                Ok(response) => {
                    if let Some(token) = response.into_token() {
                        auth::complete_sign_in(auth, &token);
                        navigate("/", NavigateOptions::default());
                    } else {
                        // Registered but not signed in (e.g. verification
                        // required); continue at the sign-in page.
                        navigate("/sign-in", NavigateOptions::default());
                    }
                }
                Err(ApiError::Validation(field_errors)) => {
                    let _ = errors.try_set(Some(map_sign_up_errors(field_errors)));
                    let _ = submitting.try_set(false);
                }
                Err(err) => {
                    let _ = errors.try_set(Some(FieldErrors::general_only(err.to_string())));
                    let _ = submitting.try_set(false);
                }
            }
        });
    };

    let field_error = move |name: &'static str| errors.get().and_then(|e| e.field(name));
    let general_error = move || errors.get().and_then(|e| e.general());

    view! {
        <div class="auth-page">
            <form class="card auth-page__card" on:submit=on_submit>
                <h2>"Create Account"</h2>
                <p class="auth-page__subtitle">"Join the Blood Bank Management System"</p>

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
                        placeholder="Create a password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || {
                        field_error("password")
                            .map(|message| view! { <span class="form-field__error">{message}</span> })
                    }}
                    <span class="form-field__hint">
                        "At least 8 characters, not too common, and not similar to your personal information."
                    </span>
                </label>

                <label class="form-field">
                    "Confirm Password"
                    <input
                        type="password"
                        name="confirm_password"
                        placeholder="Confirm your password"
                        required
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    {move || {
                        field_error("confirm_password")
                            .map(|message| view! { <span class="form-field__error">{message}</span> })
                    }}
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating Account..." } else { "Sign Up" }}
                </button>

                <p class="auth-page__switch">
                    "Already have an account? " <a href="/sign-in">"Sign In"</a>
                </p>
            </form>
        </div>
    }
}
