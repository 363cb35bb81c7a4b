//! Donation request form.
//!
//! Submitting requires a blood group on the profile: without one the submit
//! control stays disabled and no request is made. The hospital picker is
//! filtered client-side; the list itself is fetched once on mount. On
//! success the page navigates to the blood-bank listing with a success flag
//! in the URL.

#[cfg(test)]
#[path = "donate_blood_test.rs"]
mod donate_blood_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Hospital, Id};
use crate::state::auth::{self, AuthState};

/// Whether the form may be submitted. A missing blood group or hospital
/// selection blocks the submit without any network call.
fn can_submit(blood_group: Option<&str>, hospital: Option<Id>, submitting: bool) -> bool {
    blood_group.is_some_and(|group| !group.is_empty()) && hospital.is_some() && !submitting
}

/// Case-insensitive filter on hospital name and address.
fn filter_hospitals(hospitals: &[Hospital], search: &str) -> Vec<Hospital> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return hospitals.to_vec();
    }
    hospitals
        .iter()
        .filter(|hospital| {
            hospital.name.to_lowercase().contains(&needle)
                || hospital.address.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn DonateBloodPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let search = RwSignal::new(String::new());
    let hospital = RwSignal::new(None::<Id>);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // The profile carries the blood group this page gates on; fetch it once
    // if the consuming page is the first to need it.
    Effect::new(move || {
        let state = auth.get();
        if state.is_logged_in() && state.user.is_none() {
            leptos::task::spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(user) => {
                        let _ = auth.try_update(|state| state.user = Some(user));
                    }
                    Err(ApiError::Unauthorized) => auth::expire_session(auth),
                    Err(err) => leptos::logging::warn!("profile fetch failed: {err}"),
                }
            });
        }
    });

    let hospitals = LocalResource::new(|| async { api::hospital_list(&Default::default()).await });

    Effect::new(move || {
        if let Some(Err(ApiError::Unauthorized)) = hospitals.get() {
            auth::expire_session(auth);
        }
    });

    let blood_group = move || auth.get().blood_group();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let group = blood_group();
        let selected = hospital.get_untracked();
        if !can_submit(group.as_deref(), selected, submitting.get_untracked()) {
            return;
        }
        let Some(hospital_id) = selected else { return };
        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_donation(hospital_id).await {
                Ok(_) => {
                    navigate("/blood-bank?donated=1", NavigateOptions::default());
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth),
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                    let _ = submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h2>"Donate Blood"</h2>

            {move || {
                blood_group()
                    .map_or_else(
                        || {
                            view! {
                                <div class="alert alert--warning" role="status">
                                    "Please update your blood group in your profile before donating."
                                </div>
                            }
                                .into_any()
                        },
                        |group| {
                            view! {
                                <div class="alert alert--info" role="status">
                                    {format!("Your blood group is {group}. Thank you for donating blood!")}
                                </div>
                            }
                                .into_any()
                        },
                    )
            }}

            <form class="card form-page__card" on:submit=on_submit>
                <label class="form-field">
                    "Search Hospitals"
                    <input
                        type="text"
                        placeholder="Search by hospital name"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </label>

                <Suspense fallback=move || {
                    view! { <p>"Loading hospitals..."</p> }
                }>
                    {move || {
                        hospitals
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let filtered = filter_hospitals(&list, &search.get());
                                    let empty = filtered.is_empty();
                                    view! {
                                        <label class="form-field">
                                            "Select Hospital"
                                            <select
                                                name="hospital"
                                                required
                                                on:change=move |ev| {
                                                    hospital.set(event_target_value(&ev).parse().ok());
                                                }
                                            >
                                                <option value="">"-- Select Hospital --"</option>
                                                {filtered
                                                    .into_iter()
                                                    .map(|h| {
                                                        view! {
                                                            <option value=h.id.to_string()>{h.name}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                            <Show when=move || empty>
                                                <span class="form-field__error">
                                                    "No hospitals match your search criteria."
                                                </span>
                                            </Show>
                                        </label>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <div class="alert alert--error" role="alert">
                                            {err.to_string()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! { <div class="alert alert--error" role="alert">{message}</div> }
                        })
                }}

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || {
                        !can_submit(
                            blood_group().as_deref(),
                            hospital.get(),
                            submitting.get(),
                        )
                    }
                >
                    {move || if submitting.get() { "Processing..." } else { "Donate Blood" }}
                </button>
            </form>
        </div>
    }
}
