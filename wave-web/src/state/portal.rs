//! Portal state management

use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::{Portal, PortalState, PortalView, WalletAdapter};

use crate::services::{BrowserProvider, TimerDelay};

/// Portal type the page drives
pub type BrowserPortal = Portal<BrowserProvider, PortalContext, TimerDelay>;

/// Global portal context
#[derive(Clone, Copy)]
pub struct PortalContext {
    pub state: RwSignal<PortalState>,
}

impl PortalContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PortalState::default()),
        }
    }

    /// Wire a portal to the injected wallet and this context.
    ///
    /// The write phase lives in the shared signal, so every portal built from
    /// the same context sees the same in-flight guard.
    pub fn portal(&self) -> BrowserPortal {
        Portal::new(
            WalletAdapter::new(BrowserProvider::detect()),
            core_config().clone(),
            *self,
            TimerDelay,
        )
    }
}

impl Default for PortalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PortalView for PortalContext {
    fn read<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R {
        self.state.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut PortalState)) {
        self.state.update(f);
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("Failed to show alert: {:?}", e);
                }
            }
            None => log::warn!("No window for alert: {}", message),
        }
    }
}

pub fn provide_portal_context() -> PortalContext {
    let context = PortalContext::new();
    provide_context(context);
    context
}

pub fn use_portal_context() -> PortalContext {
    expect_context::<PortalContext>()
}
