//! Wave Portal browser front-end
//!
//! Connects an injected Ethereum wallet and waves at the WavePortal contract.

use leptos::prelude::*;
use lib_core::config::{self, Config, CONTRACT_ADDRESS_ENV, GAS_LIMIT_ENV, POLL_INTERVAL_ENV};
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wave Portal starting...");

    load_config();
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Resolve the static configuration from build-time variables.
///
/// A bad override is logged and the defaults are used instead.
fn load_config() {
    let result = Config::from_lookup(build_var).and_then(config::init_config);

    match result {
        Ok(()) => {
            let config = config::core_config();
            log::info!(
                "Using WavePortal at {} (gas limit {})",
                config.contract_address,
                config.gas_limit
            );
        }
        Err(e) => log::error!("{}; falling back to defaults", e),
    }
}

fn build_var(name: &str) -> Option<String> {
    let value = match name {
        CONTRACT_ADDRESS_ENV => option_env!("WAVE_PORTAL_CONTRACT"),
        GAS_LIMIT_ENV => option_env!("WAVE_PORTAL_GAS_LIMIT"),
        POLL_INTERVAL_ENV => option_env!("WAVE_PORTAL_POLL_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Hide the static loading element from `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Err(e) = loading_element.class_list().add_1("hidden") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
