//! Hotel directory: full list with local search and state/city filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the signed-in guard. The list is fetched once and
//! filtered in memory through [`HotelFilter`]; admins can delete entries.

use leptos::prelude::*;

use crate::components::hotel_card::HotelCard;
use crate::net::types::Hotel;
use crate::state::auth::use_auth;
use crate::state::hotels::{HotelFilter, distinct_cities, distinct_states, result_label};

pub const LOAD_FAILED: &str = "Failed to fetch hotels. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete hotel. Please try again.";

#[component]
pub fn HotelsPage() -> impl IntoView {
    let auth = use_auth();
    let hotels = RwSignal::new(Vec::<Hotel>::new());
    let filter = RwSignal::new(HotelFilter::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let api = crate::net::api::use_api();
        leptos::task::spawn_local(async move {
            let Some(token) = crate::state::auth::token_or_reset(&auth, loading) else {
                return;
            };
            match api.list_hotels(&token).await {
                Ok(list) => {
                    log::debug!("hotels: loaded {}", list.len());
                    hotels.set(list);
                }
                Err(e) => error.set(crate::state::auth::failure_message(&auth, &e, LOAD_FAILED)),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    loading.set(false);

    #[cfg(feature = "csr")]
    let api = StoredValue::new(crate::net::api::use_api());
    let on_delete = Callback::new(move |id: String| {
        if !crate::util::dialog::confirm(crate::util::dialog::DELETE_HOTEL_PROMPT) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::current_token(&auth) else {
                    return;
                };
                match api.delete_hotel(&token, &id).await {
                    Ok(()) => {
                        log::info!("hotels: deleted {id}");
                        hotels.update(|list| {
                            crate::state::hotels::remove_hotel(list, &id);
                        });
                    }
                    Err(e) => error.set(crate::state::auth::failure_message(&auth, &e, DELETE_FAILED)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let visible = move || hotels.with(|all| filter.with(|f| f.apply(all).into_iter().cloned().collect::<Vec<_>>()));
    let states = move || hotels.with(|all| distinct_states(all));
    let cities = move || hotels.with(|all| distinct_cities(all));
    let is_admin = crate::state::auth::admin_signal(auth);

    view! {
        <div class="hotels-page">
            <header class="page-header">
                <h1>"Hotel Directory"</h1>
                <p>"Browse partner hotels by name, state, or city."</p>
            </header>

            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by hotel name"
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    prop:value=move || filter.with(|f| f.state.clone())
                    on:change=move |ev| filter.update(|f| f.select_state(event_target_value(&ev)))
                >
                    <option value="">"All states"</option>
                    {move || states().into_iter().map(|s| view! { <option value=s.clone()>{s.clone()}</option> }).collect_view()}
                </select>
                <select
                    prop:value=move || filter.with(|f| f.city.clone())
                    on:change=move |ev| filter.update(|f| f.city = event_target_value(&ev))
                >
                    <option value="">"All cities"</option>
                    {move || cities().into_iter().map(|c| view! { <option value=c.clone()>{c.clone()}</option> }).collect_view()}
                </select>
                <button
                    class="btn btn--ghost"
                    disabled=move || !filter.with(HotelFilter::is_active)
                    on:click=move |_| filter.set(HotelFilter::default())
                >
                    "Clear filters"
                </button>
            </div>

            {move || error.get().map(|e| view! { <p class="form-message form-message--error">{e}</p> })}

            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading hotels..."</p> }>
                <p class="result-count">{move || result_label(visible().len())}</p>
                <div class="hotel-grid">
                    <For each=visible key=|h| h.id.clone() let:hotel>
                        <HotelCard hotel=hotel on_delete=Some(on_delete) can_delete=is_admin/>
                    </For>
                </div>
            </Show>
        </div>
    }
}
