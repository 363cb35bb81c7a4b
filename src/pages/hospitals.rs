//! Hospital listing page with server-side search and ordering.
//!
//! Filters live in the URL query string: the search box updates local state
//! immediately and pushes a navigation after the debounce window; the fetch
//! is keyed on the query map, so each query change refetches the list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::feedback::{EmptyState, ErrorAlert, LoadingIndicator};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Hospital, ListQuery};
use crate::state::auth::{self, AuthState};
use crate::util::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::util::query::filter_url;

#[component]
pub fn HospitalsPage() -> impl IntoView {
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

    let hospitals = LocalResource::new(move || {
        let map = query.get();
        let list_query = ListQuery::new(
            map.get("search").unwrap_or_default(),
            map.get("ordering").unwrap_or_default(),
        );
        async move { api::hospital_list(&list_query).await }
    });

    // A 401 on any fetch means the session expired; the route guard then
    // redirects to sign-in with this page as the return target.
    Effect::new(move || {
        if let Some(Err(ApiError::Unauthorized)) = hospitals.get() {
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
                    &filter_url("/hospitals", &[("search", &value), ("ordering", &ordering)]),
                    NavigateOptions::default(),
                );
            });
        }
    };

    let on_ordering = move |ev| {
        let value = event_target_value(&ev);
        let search = query.get_untracked().get("search").unwrap_or_default();
        navigate(
            &filter_url("/hospitals", &[("search", &search), ("ordering", &value)]),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Hospital List"</h2>
            </header>

            <div class="card list-page__filters">
                <label class="form-field">
                    "Search Hospitals"
                    <input
                        type="text"
                        name="search"
                        placeholder="Search by name, email, or phone..."
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
                        <option value="name">"Hospital Name (A-Z)"</option>
                        <option value="-name">"Hospital Name (Z-A)"</option>
                    </select>
                </label>
            </div>

            <Suspense fallback=move || view! { <LoadingIndicator label="Loading hospitals..."/> }>
                {move || {
                    hospitals
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <EmptyState message="No hospitals found. Try adjusting your search criteria."/>
                                }
                                    .into_any()
                            }
                            Ok(list) => view! { <HospitalTable hospitals=list/> }.into_any(),
                            Err(err) => view! { <ErrorAlert message=err.to_string()/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn HospitalTable(hospitals: Vec<Hospital>) -> impl IntoView {
    view! {
        <div class="card">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Email"</th>
                        <th>"Address"</th>
                    </tr>
                </thead>
                <tbody>
                    {hospitals
                        .into_iter()
                        .map(|hospital| {
                            let mailto = format!("mailto:{}", hospital.email);
                            view! {
                                <tr>
                                    <td>{hospital.name}</td>
                                    <td>{hospital.phone_number1}</td>
                                    <td>
                                        <a href=mailto>{hospital.email}</a>
                                    </td>
                                    <td>{hospital.address}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
