//! Admin directory of registered travel agents with CSV export.

#[cfg(test)]
#[path = "travel_agents_test.rs"]
mod travel_agents_test;

use leptos::prelude::*;

use crate::net::types::{Role, UserProfile};

pub const LOAD_FAILED: &str = "Failed to load users. Please try again.";
pub const DOWNLOAD_FAILED: &str = "Failed to download CSV. Please try again.";

/// Case-insensitive match on user name, email, company, city, or state.
pub fn matches_search(user: &UserProfile, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        Some(user.user_name.as_str()),
        Some(user.email.as_str()),
        Some(user.company_name.as_str()),
        user.city.as_deref(),
        user.state.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

/// `"City, State"`, whichever part exists, or `-`.
pub fn location_text(user: &UserProfile) -> String {
    let parts: Vec<&str> = [user.city.as_deref(), user.state.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() { "-".to_owned() } else { parts.join(", ") }
}

pub fn status_label(user: &UserProfile) -> &'static str {
    if user.approved { "Approved" } else { "Pending" }
}

fn or_dash(value: Option<&str>) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}

#[component]
pub fn TravelAgentsPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserProfile>::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let (auth, api) = (crate::state::auth::use_auth(), StoredValue::new(crate::net::api::use_api()));

    #[cfg(feature = "csr")]
    {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let Some(token) = crate::state::auth::token_or_reset(&auth, loading) else {
                return;
            };
            match api.list_users(&token).await {
                Ok(list) => users.set(list),
                Err(e) => error.set(crate::state::auth::failure_message(&auth, &e, LOAD_FAILED)),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    loading.set(false);

    let on_download = move |_| {
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::current_token(&auth) else {
                    return;
                };
                let saved = match api.download_users_csv(&token).await {
                    Ok(bytes) => crate::util::download::save_bytes(
                        crate::util::download::USERS_CSV_FILE_NAME,
                        "text/csv",
                        &bytes,
                    )
                    .map_err(|e| {
                        log::error!("agents: {e}");
                        Some(DOWNLOAD_FAILED.to_owned())
                    }),
                    Err(e) => Err(crate::state::auth::failure_message(&auth, &e, DOWNLOAD_FAILED)),
                };
                if let Err(message) = saved {
                    error.set(message);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        error.set(Some(DOWNLOAD_FAILED.to_owned()));
    };

    let visible = move || {
        users.with(|all| search.with(|term| all.iter().filter(|u| matches_search(u, term)).cloned().collect::<Vec<_>>()))
    };

    view! {
        <div class="agents-page">
            <header class="page-header">
                <h1>"Travel Agents Directory"</h1>
                <button class="btn btn--primary" on:click=on_download>"Download CSV"</button>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Search by name, email, company, city, or state"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <p class="form-message form-message--error">{e}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading users..."</p> }>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="muted">"No users found matching your search criteria."</p> }
                >
                    <table class="agents-table">
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Company"</th>
                                <th>"Contact Person"</th>
                                <th>"Phone"</th>
                                <th>"Mobile"</th>
                                <th>"Location"</th>
                                <th>"Role"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=visible key=|u| (u.id.clone(), u.user_name.clone()) let:user>
                                <tr>
                                    <td>{user.user_name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{or_dash(Some(&user.company_name))}</td>
                                    <td>{or_dash(user.concerning_person_name.as_deref())}</td>
                                    <td>{or_dash(user.contact_number.as_deref())}</td>
                                    <td>{or_dash(user.mobile_number.as_deref())}</td>
                                    <td>{location_text(&user)}</td>
                                    <td>
                                        <span class="badge">{user.role.map_or("-", Role::as_str)}</span>
                                    </td>
                                    <td>
                                        <span class="badge" class:badge--approved=user.approved>{status_label(&user)}</span>
                                    </td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
