//! Admin queue of travel-agent registrations awaiting approval.

#[cfg(test)]
#[path = "user_approval_test.rs"]
mod user_approval_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;

pub const LOAD_FAILED: &str = "Failed to load pending user approvals. Please try again.";
pub const APPROVE_FAILED: &str = "Failed to approve user. Please try again.";
pub const REJECT_FAILED: &str = "Failed to reject user. Please try again.";

pub fn pending_summary(count: usize) -> String {
    if count == 0 {
        "No pending approval requests at this time.".to_owned()
    } else {
        format!("You have {count} user registration(s) pending approval.")
    }
}

/// Drop a decided user from the queue.
pub fn remove_user(users: &mut Vec<UserProfile>, id: &str) {
    users.retain(|u| u.id.as_deref() != Some(id));
}

/// List key for a pending row; users without an id are told apart by name.
pub fn row_key(user: &UserProfile) -> (Option<String>, String) {
    (user.id.clone(), user.user_name.clone())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Approve,
    Reject,
}

#[component]
pub fn UserApprovalPage() -> impl IntoView {
    let pending = RwSignal::new(Vec::<UserProfile>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u32);

    #[cfg(feature = "csr")]
    let (auth, api) = (crate::state::auth::use_auth(), StoredValue::new(crate::net::api::use_api()));

    Effect::new(move || {
        reload.track();
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::token_or_reset(&auth, loading) else {
                    return;
                };
                match api.pending_approvals(&token).await {
                    Ok(users) => pending.set(users),
                    Err(e) => error.set(crate::state::auth::failure_message(&auth, &e, LOAD_FAILED)),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    });

    let decide = move |id: String, verdict: Verdict| {
        error.set(None);
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::current_token(&auth) else {
                    return;
                };
                let (result, fallback) = match verdict {
                    Verdict::Approve => (api.approve_user(&token, &id).await, APPROVE_FAILED),
                    Verdict::Reject => (api.reject_user(&token, &id).await, REJECT_FAILED),
                };
                match result {
                    Ok(()) => {
                        log::info!("approvals: {verdict:?} user {id}");
                        pending.update(|users| remove_user(users, &id));
                    }
                    Err(e) => error.set(crate::state::auth::failure_message(&auth, &e, fallback)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (id, verdict);
    };

    view! {
        <div class="approval-page">
            <header class="page-header">
                <h1>"User Approval Dashboard"</h1>
            </header>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="form-message form-message--error">
                                <p>{e}</p>
                                <button class="btn btn--ghost" on:click=move |_| reload.update(|n| *n += 1)>"Retry"</button>
                            </div>
                        }
                    })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading pending users..."</p> }>
                <p>{move || pending.with(|p| pending_summary(p.len()))}</p>
                <For each=move || pending.get() key=row_key let:user>
                    {
                        let id = user.id.clone();
                        view! {
                            <article class="approval-card">
                                <header>
                                    <h3>{user.user_name.clone()}</h3>
                                    {id.map(|id| {
                                        let reject_id = id.clone();
                                        view! {
                                            <div class="approval-card__actions">
                                                <button class="btn btn--primary" on:click=move |_| decide(id.clone(), Verdict::Approve)>
                                                    "Approve"
                                                </button>
                                                <button class="btn btn--danger" on:click=move |_| decide(reject_id.clone(), Verdict::Reject)>
                                                    "Reject"
                                                </button>
                                            </div>
                                        }
                                    })}
                                </header>
                                <dl>
                                    <dt>"Company"</dt>
                                    <dd>{user.company_name.clone()}</dd>
                                    <dt>"Contact person"</dt>
                                    <dd>{user.concerning_person_name.clone().unwrap_or_default()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                    <dt>"Phone"</dt>
                                    <dd>{user.contact_number.clone().unwrap_or_default()}</dd>
                                    <dt>"Mobile"</dt>
                                    <dd>{user.mobile_number.clone().unwrap_or_default()}</dd>
                                    <dt>"Location"</dt>
                                    <dd>{crate::pages::travel_agents::location_text(&user)}</dd>
                                </dl>
                            </article>
                        }
                    }
                </For>
            </Show>
        </div>
    }
}
