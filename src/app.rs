//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::pages::{
    blood_bank::BloodBankPage, donate_blood::DonateBloodPage, hospitals::HospitalsPage,
    landing::LandingPage, receive_blood::ReceiveBloodPage, recipient::RecipientPage,
    sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::session;
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the auth context, restores any stored session on mount, and sets
/// up client-side routing behind the sign-in guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve the tri-state login status exactly once, on mount. A stored
    // token is trusted until a request comes back 401.
    Effect::new(move || {
        auth.update(|state| state.bootstrap(session::get().is_some()));
    });

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Blood Bank"/>

        <Router>
            <NavBar/>
            <main class="page">
                <RouteGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("sign-in") view=SignInPage/>
                        <Route path=StaticSegment("sign-up") view=SignUpPage/>
                        <Route path=StaticSegment("hospitals") view=HospitalsPage/>
                        <Route path=StaticSegment("blood-bank") view=BloodBankPage/>
                        <Route path=StaticSegment("donate-blood") view=DonateBloodPage/>
                        <Route path=StaticSegment("receive-blood") view=ReceiveBloodPage/>
                        <Route path=StaticSegment("recipient") view=RecipientPage/>
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
