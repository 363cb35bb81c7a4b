//! Top navigation bar with section links and the sign-out control.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::{self, AuthState};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let user_label = move || auth.get().user.map(|user| user.display_name());

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Best effort: the local session is cleared even if the
            // backend call fails.
            if let Err(err) = api::sign_out().await {
                leptos::logging::warn!("sign-out request failed: {err}");
            }
            auth::expire_session(auth);
            navigate("/sign-in", NavigateOptions::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Blood Bank"</a>
            <Show
                when=move || auth.get().is_logged_in()
                fallback=|| {
                    view! {
                        <div class="nav-bar__links">
                            <a href="/sign-in">"Sign In"</a>
                            <a href="/sign-up">"Sign Up"</a>
                        </div>
                    }
                }
            >
                <div class="nav-bar__links">
                    <a href="/hospitals">"Hospitals"</a>
                    <a href="/blood-bank">"Blood Bank"</a>
                    <a href="/donate-blood">"Donate"</a>
                    <a href="/receive-blood">"Receive"</a>
                    <a href="/recipient">"Recipients"</a>
                </div>
                <div class="nav-bar__session">
                    {user_label}
                    <button class="btn btn--link" on:click=on_sign_out.clone()>
                        "Sign Out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
