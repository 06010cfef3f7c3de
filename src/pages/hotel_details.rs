//! Single-hotel page, reached from the directory's "Details" link.

#[cfg(test)]
#[path = "hotel_details_test.rs"]
mod hotel_details_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::hotel_card::contact_rows;
use crate::net::error::ApiError;
use crate::net::types::Hotel;
use crate::state::auth::use_auth;

pub const NOT_FOUND: &str = "Hotel not found";
pub const LOAD_FAILED: &str = "Failed to load hotel details. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete hotel. Please try again.";

pub fn details_error_message(err: &ApiError) -> &'static str {
    if matches!(err, ApiError::NotFound) { NOT_FOUND } else { LOAD_FAILED }
}

#[component]
pub fn HotelDetailsPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let hotel = RwSignal::new(None::<Hotel>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    let api = StoredValue::new(crate::net::api::use_api());

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            error.set(Some(NOT_FOUND.to_owned()));
            loading.set(false);
            return;
        };
        loading.set(true);
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::token_or_reset(&auth, loading) else {
                    return;
                };
                match api.get_hotel(&token, &id).await {
                    Ok(found) => {
                        hotel.set(Some(found));
                        error.set(None);
                    }
                    Err(e) => {
                        if !crate::state::auth::check_api_error(&auth, &e) {
                            log::error!("hotel {id}: {e}");
                            error.set(Some(details_error_message(&e).to_owned()));
                        }
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    let deleted = RwSignal::new(false);
    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if deleted.get() {
                navigate("/hotels", leptos_router::NavigateOptions::default());
            }
        });
    }
    let on_delete = move |_| {
        let Some(id) = hotel.with(|h| h.as_ref().map(|h| h.id.clone())) else {
            return;
        };
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
                        log::info!("hotel {id}: deleted");
                        deleted.set(true);
                    }
                    Err(e) => error.set(crate::state::auth::failure_message(&auth, &e, DELETE_FAILED)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="hotel-details-page">
            <A href="/hotels" attr:class="btn btn--ghost">"Back to hotels"</A>
            {move || {
                if loading.get() {
                    return view! { <p class="muted">"Loading hotel details..."</p> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="error-panel">
                            <h2>"Error"</h2>
                            <p>{message}</p>
                        </div>
                    }
                        .into_any();
                }
                let Some(h) = hotel.get() else {
                    return ().into_any();
                };
                let location = h.location();
                let rows = contact_rows(&h);
                view! {
                    <article class="hotel-details">
                        <header>
                            <h1>{h.hotel_name}</h1>
                            {h.preferred.then(|| view! { <span class="badge badge--preferred">"Preferred"</span> })}
                            <p class="hotel-details__location">{location}</p>
                        </header>
                        <dl>
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                })
                                .collect_view()}
                        </dl>
                    </article>
                }
                    .into_any()
            }}
            <Show when=move || auth.state().is_admin() && hotel.with(Option::is_some)>
                <button class="btn btn--danger" on:click=on_delete>"Delete hotel"</button>
            </Show>
        </div>
    }
}
