//! Blood-bank inventory page: one card per hospital + blood group.
//!
//! Shows a success banner when reached via the post-donation redirect
//! (`/blood-bank?donated=1`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::blood_group::{BloodGroupBadge, quantity_class};
use crate::components::feedback::{EmptyState, ErrorAlert, LoadingIndicator, SuccessAlert};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{BloodBankEntry, ListQuery};
use crate::state::auth::{self, AuthState};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::util::query::filter_url;

#[component]
pub fn BloodBankPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let search_input =
        RwSignal::new(query.get_untracked().get("search").unwrap_or_default());
    let debouncer = Debouncer::new();
    {
        let debouncer = debouncer.clone();
        on_cleanup(move || debouncer.cancel());
    }

    let entries = LocalResource::new(move || {
        let map = query.get();
        let list_query = ListQuery::new(
            map.get("search").unwrap_or_default(),
            map.get("ordering").unwrap_or_default(),
        );
        async move { api::blood_bank_list(&list_query).await }
    });

    Effect::new(move || {
        if let Some(Err(ApiError::Unauthorized)) = entries.get() {
            auth::expire_session(auth);
        }
    });

    let donated = move || query.get().get("donated").is_some();

    let on_search = {
        let navigate = navigate.clone();
        move |ev| {
            let value = event_target_value(&ev);
            search_input.set(value.clone());
            let navigate = navigate.clone();
            let ordering = query.get_untracked().get("ordering").unwrap_or_default();
            debouncer.schedule(SEARCH_DEBOUNCE, move || {
                navigate(
                    &filter_url("/blood-bank", &[("search", &value), ("ordering", &ordering)]),
                    NavigateOptions::default(),
                );
            });
        }
    };

    let on_ordering = move |ev| {
        let value = event_target_value(&ev);
        let search = query.get_untracked().get("search").unwrap_or_default();
        navigate(
            &filter_url("/blood-bank", &[("search", &search), ("ordering", &value)]),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Blood Bank"</h2>
                <a class="btn btn--primary" href="/donate-blood">"Donate Blood"</a>
            </header>

            <Show when=donated>
                <SuccessAlert message="Thank you! Your donation request has been submitted for approval."/>
            </Show>

            <div class="card list-page__filters">
                <label class="form-field">
                    "Search Blood Bank"
                    <input
                        type="text"
                        name="search"
                        placeholder="Search by hospital..."
                        prop:value=move || search_input.get()
                        on:input=on_search
                    />
                </label>
                <label class="form-field">
                    "Sort By"
                    <select
                        name="ordering"
                        prop:value=move || query.get().get("ordering").unwrap_or_default()
                        on:change=on_ordering
                    >
                        <option value="">"Default"</option>
                        <option value="name">"Hospital (A-Z)"</option>
                        <option value="-name">"Hospital (Z-A)"</option>
                    </select>
                </label>
            </div>

            <Suspense fallback=move || {
                view! { <LoadingIndicator label="Loading blood bank data..."/> }
            }>
                {move || {
                    entries
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <EmptyState message="No blood bank data found. Try adjusting your search criteria."/>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|entry| view! { <BloodBankCard entry=entry/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <ErrorAlert message=err.to_string()/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn BloodBankCard(entry: BloodBankEntry) -> impl IntoView {
    let units = if entry.bag_quantity == 1 { "unit" } else { "units" };
    view! {
        <div class="card bank-card">
            <h3>{entry.hospital_name}</h3>
            <BloodGroupBadge blood_group=entry.blood_group/>
            <p class=quantity_class(entry.bag_quantity)>
                {format!("{} {units} available", entry.bag_quantity)}
            </p>
            <a class="btn" href="/receive-blood">"Request Blood"</a>
        </div>
    }
}
