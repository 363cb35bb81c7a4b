//! Inline feedback: loading indicator, dismissible error alert, empty-state
//! message. Failures are always surfaced inline, never as blocking dialogs.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" role="status" aria-label="Loading"></span>
            <p>{label}</p>
        </div>
    }
}

/// Dismissible error banner. Dismissal is local to one render of the alert;
/// a refetch produces a fresh one.
#[component]
pub fn ErrorAlert(message: String) -> impl IntoView {
    let dismissed = RwSignal::new(false);

    view! {
        <Show when=move || !dismissed.get()>
            <div class="alert alert--error" role="alert">
                <span>{message.clone()}</span>
                <button
                    class="alert__close"
                    aria-label="Dismiss"
                    on:click=move |_| dismissed.set(true)
                >
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}

/// Informational message for an empty collection, not an error.
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! { <div class="alert alert--info" role="status">{message}</div> }
}

/// Success banner, e.g. after a donation request was accepted.
#[component]
pub fn SuccessAlert(message: &'static str) -> impl IntoView {
    let dismissed = RwSignal::new(false);

    view! {
        <Show when=move || !dismissed.get()>
            <div class="alert alert--success" role="status">
                <span>{message}</span>
                <button
                    class="alert__close"
                    aria-label="Dismiss"
                    on:click=move |_| dismissed.set(true)
                >
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}
