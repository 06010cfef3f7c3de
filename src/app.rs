//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    add_hotel::AddHotelPage, home::HomePage, hotel_details::HotelDetailsPage, hotels::HotelsPage, login::LoginPage,
    register::RegisterPage, travel_agents::TravelAgentsPage, user_approval::UserApprovalPage,
};
use crate::state::auth::provide_auth;

/// Root application component.
///
/// Restores the session from storage once, provides it with the API client,
/// and maps every route to its page and guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiClient::new(AppConfig::from_build_env()));
    provide_auth();

    view! {
        <Title text="Columbus Vacations Admin"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("hotels")
                        view=|| view! { <Protected><HotelsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("hotels"), ParamSegment("id"))
                        view=|| view! { <Protected><HotelDetailsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("add-hotel")
                        view=|| view! { <Protected requires_admin=true><AddHotelPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("user-approval")
                        view=|| view! { <Protected requires_admin=true><UserApprovalPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("travel-agents")
                        view=|| view! { <Protected requires_admin=true><TravelAgentsPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
