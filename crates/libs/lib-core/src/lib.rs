//! # Core Library
//!
//! Wallet access, contract calls and page orchestration for the wave portal.
//! Nothing here depends on the browser: the injected wallet is reached through
//! [`provider::Eip1193Provider`] and the page state through
//! [`portal::PortalView`].

pub mod config;
pub mod contract;
pub mod error;
pub mod portal;
pub mod provider;
pub mod wallet;

#[cfg(test)]
mod mock;

// Re-export commonly used types
pub use config::Config;
pub use contract::{ContractGateway, PendingWave, PollDelay, WaveReceipt};
pub use error::{PortalError, Result};
pub use portal::{Portal, PortalState, PortalView, WaveOutcome, WritePhase};
pub use provider::{Eip1193Provider, ProviderError};
pub use wallet::WalletAdapter;
