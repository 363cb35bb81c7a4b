//! Recipient listing page: fulfilled receive-blood requests.

#[cfg(test)]
#[path = "recipient_test.rs"]
mod recipient_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::blood_group::BloodGroupBadge;
use crate::components::feedback::{EmptyState, ErrorAlert, LoadingIndicator};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ListQuery, RecipientEntry};
use crate::state::auth::{self, AuthState};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::util::query::filter_url;

/// The date part of a backend timestamp; the full string when it does not
/// look like one.
fn display_date(created_at: &str) -> &str {
    match created_at.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => created_at,
    }
}

#[component]
pub fn RecipientPage() -> impl IntoView {
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

    let recipients = LocalResource::new(move || {
        let map = query.get();
        let list_query = ListQuery::new(
            map.get("search").unwrap_or_default(),
            map.get("ordering").unwrap_or_default(),
        );
        async move { api::recipient_list(&list_query).await }
    });

    Effect::new(move || {
        if let Some(Err(ApiError::Unauthorized)) = recipients.get() {
            auth::expire_session(auth);
        }
    });

    let on_search = {
        let navigate = navigate.clone();
        move |ev| {
            let value = event_target_value(&ev);
            search_input.set(value.clone());
            let navigate = navigate.clone();
            let ordering = query.get_untracked().get("ordering").unwrap_or_default();
            debouncer.schedule(SEARCH_DEBOUNCE, move || {
                navigate(
                    &filter_url("/recipient", &[("search", &value), ("ordering", &ordering)]),
                    NavigateOptions::default(),
                );
            });
        }
    };

    let on_ordering = move |ev| {
        let value = event_target_value(&ev);
        let search = query.get_untracked().get("search").unwrap_or_default();
        navigate(
            &filter_url("/recipient", &[("search", &search), ("ordering", &value)]),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Recipients"</h2>
                <a class="btn btn--primary" href="/receive-blood">"Receive Blood"</a>
            </header>

            <div class="card list-page__filters">
                <label class="form-field">
                    "Search Recipients"
                    <input
                        type="text"
                        name="search"
                        placeholder="Search by name..."
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
                        <option value="owner">"Recipient (A-Z)"</option>
                        <option value="-owner">"Recipient (Z-A)"</option>
                        <option value="blood_bank__hospital">"Hospital (A-Z)"</option>
                        <option value="-blood_bank__hospital">"Hospital (Z-A)"</option>
                        <option value="created_at">"Date (Oldest first)"</option>
                        <option value="-created_at">"Date (Newest first)"</option>
                    </select>
                </label>
            </div>

            <Suspense fallback=move || {
                view! { <LoadingIndicator label="Loading recipient data..."/> }
            }>
                {move || {
                    recipients
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <EmptyState message="No recipient data found. Try adjusting your search criteria."/>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|entry| view! { <RecipientCard entry=entry/> })
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
fn RecipientCard(entry: RecipientEntry) -> impl IntoView {
    let units = if entry.bag_quantity == 1 { "unit" } else { "units" };
    let received = display_date(&entry.created_at).to_owned();
    view! {
        <div class="card recipient-card">
            <h3>{entry.recipient}</h3>
            <BloodGroupBadge blood_group=entry.blood_bank_details.blood_group/>
            <p>{entry.blood_bank_details.hospital}</p>
            <p>{format!("{} {units}", entry.bag_quantity)}</p>
            <p class="recipient-card__date">{received}</p>
        </div>
    }
}
