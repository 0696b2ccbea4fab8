//! Wave Portal page
//!
//! Header, connect button, message box and the on-chain wave log.

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::WaveOutcome;

use crate::components::WaveCard;
use crate::state::portal::use_portal_context;
use crate::utils::constants::{CONNECT_LABEL, MESSAGE_PLACEHOLDER, PAGE_BIO, PAGE_HEADER};
use crate::utils::format::format_wave_count;

#[component]
pub fn PortalPage() -> impl IntoView {
    let ctx = use_portal_context();
    let message_input: NodeRef<html::Input> = NodeRef::new();

    // Silent account check and first read on mount
    spawn_local(async move {
        ctx.portal().load().await;
    });

    let connect = move |_: MouseEvent| {
        spawn_local(async move {
            ctx.portal().connect().await;
        });
    };

    let wave = move |_: MouseEvent| {
        let message = message_input
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();

        spawn_local(async move {
            match ctx.portal().wave(&message).await {
                WaveOutcome::Ignored => return,
                WaveOutcome::Confirmed(receipt) => {
                    log::info!("Wave {} --> {}", receipt.status.label(), receipt.hash);
                }
                WaveOutcome::Failed(e) if e.is_user_rejection() => {
                    log::info!("Wave cancelled in wallet");
                }
                WaveOutcome::Failed(e) => log::warn!("{}", e.user_message()),
            }

            if let Some(input) = message_input.get_untracked() {
                input.set_value("");
            }
        });
    };

    let idle = move || ctx.state.with(|state| state.phase.is_idle());
    let button_label = move || ctx.state.with(|state| state.phase.button_label());
    let connected = move || ctx.state.with(|state| state.account.is_some());
    let wave_count = move || ctx.state.with(|state| format_wave_count(state.wave_count));

    view! {
        <div class="main-container">
            <div class="data-container">
                <div class="header">{PAGE_HEADER}</div>
                <div class="bio">{PAGE_BIO}</div>
                <div class="bio">{wave_count}</div>

                <input
                    class="message-input"
                    type="text"
                    placeholder=MESSAGE_PLACEHOLDER
                    node_ref=message_input
                />

                <button class="wave-button" disabled=move || !idle() on:click=wave>
                    {button_label}
                </button>

                <Show when=move || !connected()>
                    <button class="wave-button" on:click=connect>
                        {CONNECT_LABEL}
                    </button>
                </Show>

                {move || {
                    ctx.state
                        .with(|state| state.entries.clone())
                        .into_iter()
                        .map(|entry| view! { <WaveCard entry=entry/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
