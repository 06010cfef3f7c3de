//! Landing page with a hotel preview for signed-in users.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::{LOGIN_PATH, Session};

use crate::components::hotel_card::HotelCard;
use crate::net::types::Hotel;
use crate::state::auth::use_auth;

pub const FETCH_FAILED: &str = "Error fetching hotels.";
pub const SEARCH_FAILED: &str = "Error searching hotels.";

/// Target of the "view all hotels" button.
pub fn view_all_path(session: &Session) -> &'static str {
    if session.is_authenticated() { "/hotels" } else { LOGIN_PATH }
}

/// A blank query reloads the plain preview instead of searching.
pub fn search_term(query: &str) -> Option<&str> {
    Some(query.trim()).filter(|q| !q.is_empty())
}

/// Load the preview: the first hotels of the directory or of a name search.
#[cfg(feature = "csr")]
async fn load_preview(
    api: &crate::net::api::ApiClient,
    auth: &crate::state::auth::AuthContext,
    query: &str,
) -> Result<Vec<Hotel>, Option<String>> {
    let Some(token) = crate::state::auth::current_token(auth) else {
        return Ok(Vec::new());
    };
    let (result, fallback) = match search_term(query) {
        Some(term) => (api.search_hotels(&token, term).await, SEARCH_FAILED),
        None => (api.list_hotels(&token).await, FETCH_FAILED),
    };
    let limit = api.config().home_preview_limit;
    result
        .map(|hotels| crate::state::hotels::preview(hotels, limit))
        .map_err(|e| crate::state::auth::failure_message(auth, &e, fallback))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let hotels = RwSignal::new(Vec::<Hotel>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());
    // Bumped per request so a slow response never overwrites a newer one.
    let generation = RwSignal::new(0_u64);
    #[cfg(feature = "csr")]
    let api = StoredValue::new(crate::net::api::use_api());

    let fetch = move |q: String| {
        let current = generation.get_untracked() + 1;
        generation.set(current);
        loading.set(true);
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let result = load_preview(&api, &auth, &q).await;
                if generation.get_untracked() != current {
                    return;
                }
                match result {
                    Ok(list) => {
                        hotels.set(list);
                        error.set(None);
                    }
                    Err(message) => error.set(message),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = q;
            loading.set(false);
        }
    };

    Effect::new(move || {
        if auth.state().is_authenticated() {
            fetch(String::new());
        } else {
            hotels.set(Vec::new());
        }
    });

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        fetch(value);
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Discover Extraordinary Destinations"</h1>
                <p>"The Columbus Vacations directory of partner hotels, curated for travel agents."</p>
                <A href=move || view_all_path(&auth.state()).to_owned() attr:class="btn btn--primary">"View All Hotels"</A>
            </section>

            <Show
                when=move || auth.state().is_authenticated()
                fallback=|| view! {
                    <section class="home-page__guest">
                        <h2>"Why Choose Columbus Vacations?"</h2>
                        <p>"Sign in to browse the hotel directory, or register your agency for access."</p>
                        <div class="home-page__actions">
                            <A href="/login" attr:class="btn btn--primary">"Login"</A>
                            <A href="/register" attr:class="btn btn--secondary">"Register"</A>
                        </div>
                    </section>
                }
            >
                <section class="home-page__preview">
                    <h2>"Featured Hotels"</h2>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search hotels by name"
                        prop:value=move || query.get()
                        on:input=on_search
                    />
                    {move || error.get().map(|e| view! { <p class="form-message form-message--error">{e}</p> })}
                    <Show when=move || loading.get()>
                        <p class="muted">"Loading hotels..."</p>
                    </Show>
                    <Show when=move || !loading.get() && hotels.with(Vec::is_empty) && error.get().is_none()>
                        <p class="muted">"No hotels found matching your search."</p>
                    </Show>
                    <div class="hotel-grid">
                        <For each=move || hotels.get() key=|h| h.id.clone() let:hotel>
                            <HotelCard hotel=hotel/>
                        </For>
                    </div>
                </section>
            </Show>
        </div>
    }
}
