//! Wave Portal root component

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::PortalPage;
use crate::state::portal::provide_portal_context;

#[component]
pub fn App() -> impl IntoView {
    provide_portal_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=PortalPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="main-container">
            <div class="data-container">
                <div class="header">"404 - Page Not Found"</div>
                <p class="bio">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="wave-button">"Go to the portal"</span>
                </A>
            </div>
        </div>
    }
}
