//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::portal::use_portal_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_portal_context();

    let account = move || {
        ctx.state
            .with(|state| state.account.map(|account| truncate_address(&account.to_checksum(None))))
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Wave Portal"</span>
                </A>
                {move || account().map(|account| view! { <span class="nav-account">{account}</span> })}
            </div>
        </nav>
    }
}
