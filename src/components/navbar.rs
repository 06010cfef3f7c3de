//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links depend on the session: guests see login/register, signed-in users
//! see the directory, admins additionally see the management pages.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::{LOGIN_PATH, Session};

use crate::state::auth::use_auth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

/// Links visible for `session`, in display order.
pub fn nav_links(session: &Session) -> Vec<NavLink> {
    let mut links = vec![link("/", "Home")];
    if session.is_authenticated() {
        links.push(link("/hotels", "Hotels"));
    }
    if session.is_admin() {
        links.extend([
            link("/add-hotel", "Add Hotel"),
            link("/user-approval", "Approvals"),
            link("/travel-agents", "Agents"),
        ]);
    }
    links
}

/// Uppercased first letter of the user name, `U` when unknown.
pub fn avatar_initial(session: &Session) -> String {
    session
        .display_name()
        .and_then(|name| name.trim().chars().next())
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

pub fn display_name(session: &Session) -> String {
    session.display_name().unwrap_or("User").to_owned()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let menu_open = RwSignal::new(false);

    // The link itself navigates to the login page.
    let on_logout = move |_| {
        if let Err(e) = auth.logout() {
            log::warn!("navbar: persisted session not fully cleared: {e}");
        }
        menu_open.set(false);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">"Columbus Vacations"</A>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    {move || {
                        nav_links(&auth.state())
                            .into_iter()
                            .map(|l| {
                                view! {
                                    <A href=l.href attr:class="navbar__link" on:click=move |_| menu_open.set(false)>
                                        {l.label}
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                    {move || {
                        let session = auth.state();
                        if session.is_authenticated() {
                            view! {
                                <div class="navbar__user">
                                    <span class="navbar__avatar">{avatar_initial(&session)}</span>
                                    <span class="navbar__name">{display_name(&session)}</span>
                                    <A href=LOGIN_PATH attr:class="btn btn--ghost" on:click=on_logout>
                                        "Logout"
                                    </A>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="navbar__guest">
                                    <A href=LOGIN_PATH attr:class="navbar__link">"Login"</A>
                                    <A href="/register" attr:class="btn btn--primary">"Register"</A>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
