//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1>"Donate blood, save lives"</h1>
                <p>
                    "Find participating hospitals, check blood-bank stock, and "
                    "request or donate blood in a few clicks."
                </p>
                <Show
                    when=move || auth.get().is_logged_in()
                    fallback=|| {
                        view! {
                            <div class="landing__actions">
                                <a class="btn btn--primary" href="/sign-in">"Sign In"</a>
                                <a class="btn" href="/sign-up">"Create Account"</a>
                            </div>
                        }
                    }
                >
                    <div class="landing__actions">
                        <a class="btn btn--primary" href="/blood-bank">"Browse Blood Bank"</a>
                        <a class="btn" href="/donate-blood">"Donate Blood"</a>
                    </div>
                </Show>
            </section>
            <section class="landing__cards">
                <div class="card">
                    <h3>"Hospitals"</h3>
                    <p>"Browse the registered hospitals and their contact details."</p>
                </div>
                <div class="card">
                    <h3>"Blood Bank"</h3>
                    <p>"Live stock per hospital and blood group."</p>
                </div>
                <div class="card">
                    <h3>"Recipients"</h3>
                    <p>"Requests fulfilled from the shared inventory."</p>
                </div>
            </section>
        </div>
    }
}
