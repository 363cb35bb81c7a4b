//! Receive-blood request form.
//!
//! The blood-bank picker is narrowed client-side by a search term and a
//! blood-group filter. Validation failures come back field-keyed
//! (`bag_quantity`, `blood_bank`) and are shown next to the matching inputs;
//! anything unkeyed lands in the general alert. On success the page
//! navigates to the recipient listing.

#[cfg(test)]
#[path = "receive_blood_test.rs"]
mod receive_blood_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::error::{ApiError, FieldErrors};
use crate::net::types::{BloodBankEntry, Id, ListQuery};
use crate::state::auth::{self, AuthState};

/// Narrow the picker by hospital-name search and blood-group filter.
fn filter_banks(banks: &[BloodBankEntry], search: &str, blood_group: &str) -> Vec<BloodBankEntry> {
    let needle = search.trim().to_lowercase();
    banks
        .iter()
        .filter(|bank| needle.is_empty() || bank.hospital_name.to_lowercase().contains(&needle))
        .filter(|bank| blood_group.is_empty() || bank.blood_group == blood_group)
        .cloned()
        .collect()
}

/// Distinct blood groups present in the inventory, in display order.
fn unique_blood_groups(banks: &[BloodBankEntry]) -> Vec<String> {
    let mut groups: Vec<String> = banks
        .iter()
        .map(|bank| bank.blood_group.clone())
        .filter(|group| !group.is_empty())
        .collect();
    groups.sort();
    groups.dedup();
    groups
}

#[component]
pub fn ReceiveBloodPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let search = RwSignal::new(String::new());
    let group_filter = RwSignal::new(String::new());
    let blood_bank = RwSignal::new(None::<Id>);
    let bag_quantity = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<FieldErrors>);
    let submitting = RwSignal::new(false);

    let banks = LocalResource::new(|| async { api::blood_bank_list(&ListQuery::default()).await });

    Effect::new(move || {
        if let Some(Err(ApiError::Unauthorized)) = banks.get() {
            auth::expire_session(auth);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(bank_id) = blood_bank.get_untracked() else {
            return;
        };
        let Ok(quantity) = bag_quantity.get_untracked().trim().parse::<i64>() else {
            errors.set(Some(FieldErrors::general_only("Enter a valid bag quantity.")));
            return;
        };
        submitting.set(true);
        errors.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_recipient(bank_id, quantity).await {
                Ok(_) => navigate("/recipient", NavigateOptions::default()),
                Err(ApiError::Unauthorized) => auth::expire_session(auth),
                Err(ApiError::Validation(field_errors)) => {
                    let _ = errors.try_set(Some(field_errors));
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
        <div class="form-page">
            <h2>"Receive Blood"</h2>

            {move || {
                general_error()
                    .map(|message| {
                        view! { <div class="alert alert--error" role="alert">{message}</div> }
                    })
            }}

            <form class="card form-page__card" on:submit=on_submit>
                <Suspense fallback=move || view! { <p>"Loading blood banks..."</p> }>
                    {move || {
                        banks
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let groups = unique_blood_groups(&list);
                                    let filtered =
                                        filter_banks(&list, &search.get(), &group_filter.get());
                                    let empty = filtered.is_empty();
                                    view! {
                                        <div class="form-page__filters">
                                            <label class="form-field">
                                                "Search Blood Banks"
                                                <input
                                                    type="text"
                                                    placeholder="Search by hospital name"
                                                    prop:value=move || search.get()
                                                    on:input=move |ev| search.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <label class="form-field">
                                                "Filter by Blood Group"
                                                <select on:change=move |ev| {
                                                    group_filter.set(event_target_value(&ev));
                                                }>
                                                    <option value="">"All Blood Groups"</option>
                                                    {groups
                                                        .into_iter()
                                                        .map(|group| {
                                                            let value = group.clone();
                                                            view! { <option value=value>{group}</option> }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </label>
                                        </div>

                                        <label class="form-field">
                                            "Select a Blood Bank"
                                            <select
                                                name="blood_bank"
                                                required
                                                on:change=move |ev| {
                                                    blood_bank.set(event_target_value(&ev).parse().ok());
                                                }
                                            >
                                                <option value="">"-- Select Blood Bank --"</option>
                                                {filtered
                                                    .into_iter()
                                                    .map(|bank| {
                                                        let label = format!(
                                                            "{} - {} ({} units available)",
                                                            bank.hospital_name,
                                                            bank.blood_group,
                                                            bank.bag_quantity,
                                                        );
                                                        view! {
                                                            <option value=bank.id.to_string()>{label}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                            {move || {
                                                field_error("blood_bank")
                                                    .map(|message| {
                                                        view! {
                                                            <span class="form-field__error">{message}</span>
                                                        }
                                                    })
                                            }}
                                            <Show when=move || empty>
                                                <span class="form-field__error">
                                                    "No blood banks match your criteria."
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

                <label class="form-field">
                    "Bag Quantity"
                    <input
                        type="number"
                        name="bag_quantity"
                        min="1"
                        placeholder="Enter quantity needed"
                        required
                        prop:value=move || bag_quantity.get()
                        on:input=move |ev| bag_quantity.set(event_target_value(&ev))
                    />
                    {move || {
                        field_error("bag_quantity")
                            .map(|message| view! { <span class="form-field__error">{message}</span> })
                    }}
                </label>

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || submitting.get() || blood_bank.get().is_none()
                >
                    {move || if submitting.get() { "Processing..." } else { "Receive Blood" }}
                </button>
            </form>
        </div>
    }
}
