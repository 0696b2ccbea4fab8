//! # Wallet Adapter
//!
//! Account access through the injected provider:
//!
//! - [`WalletAdapter::current_accounts`] - `eth_accounts`, never prompts
//! - [`WalletAdapter::request_accounts`] - `eth_requestAccounts`, opens the wallet prompt
//!
//! The adapter keeps no state of its own; the active account lives in the
//! view's `PortalState`.

use alloy_primitives::Address;
use serde_json::json;
use tracing::{debug, instrument};

use crate::error::{PortalError, Result};
use crate::provider::{request_as, Eip1193Provider};

pub struct WalletAdapter<P> {
    provider: Option<P>,
}

impl<P: Eip1193Provider> WalletAdapter<P> {
    /// Wrap the result of provider detection (`None` when no wallet is installed).
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    /// The injected provider, if one was found.
    pub fn detect_provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// The injected provider, or [`PortalError::NoProvider`].
    pub fn provider(&self) -> Result<&P> {
        self.provider.as_ref().ok_or(PortalError::NoProvider)
    }

    /// Ask the user to authorize accounts for this page.
    ///
    /// # Errors
    ///
    /// - [`PortalError::NoProvider`] when no wallet is installed
    /// - [`PortalError::UserRejected`] when the prompt is declined
    #[instrument(skip(self))]
    pub async fn request_accounts(&self) -> Result<Vec<Address>> {
        let provider = self.provider()?;
        let accounts: Vec<Address> = request_as(provider, "eth_requestAccounts", json!([])).await?;
        debug!("Wallet granted {} account(s)", accounts.len());
        Ok(accounts)
    }

    /// Accounts already authorized for this page, without prompting.
    #[instrument(skip(self))]
    pub async fn current_accounts(&self) -> Result<Vec<Address>> {
        let provider = self.provider()?;
        let accounts: Vec<Address> = request_as(provider, "eth_accounts", json!([])).await?;
        debug!("Found {} authorized account(s)", accounts.len());
        Ok(accounts)
    }
}
