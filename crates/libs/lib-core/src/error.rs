//! # Centralized Error Handling
//!
//! This module defines [`PortalError`], the error type shared by the wallet
//! adapter, the contract gateway and the orchestration layer.
//!
//! ## Error Categories
//!
//! 1. **Wallet** - the injected provider
//!    - [`NoProvider`](PortalError::NoProvider): no wallet extension installed
//!    - [`UserRejected`](PortalError::UserRejected): the wallet prompt was declined
//!    - [`NoAccount`](PortalError::NoAccount): no authorized account to send from
//!
//! 2. **Remote** - network, provider or contract failures
//!    - [`Rpc`](PortalError::Rpc)
//!    - [`Decoding`](PortalError::Decoding): response could not be decoded
//!
//! 3. **Local**
//!    - [`Validation`](PortalError::Validation): rejected before any network call
//!    - [`Config`](PortalError::Config): invalid startup configuration
//!
//! ## Policy
//!
//! Errors are caught and logged where an operation is started. None are retried
//! and none take the view down; the user may simply try again.
//!
//! ```rust
//! use lib_core::error::{PortalError, Result};
//!
//! fn check_message(message: &str) -> Result<()> {
//!     if message.trim().is_empty() {
//!         return Err(PortalError::Validation("Message cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_message("  ").is_err());
//! ```

use thiserror::Error;

use crate::provider::ProviderError;

/// Convenience type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    /// No injected wallet provider on the page.
    #[error("No wallet provider found")]
    NoProvider,

    /// The user declined the wallet prompt.
    #[error("Request rejected by user: {0}")]
    UserRejected(String),

    /// The wallet exposes no authorized account.
    #[error("No authorized account")]
    NoAccount,

    /// Network, provider or contract call failure.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Response data could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid user input, rejected before any network call.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Invalid static configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PortalError {
    /// Whether the user declined the wallet prompt.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, PortalError::UserRejected(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PortalError::NoProvider => "Get MetaMask!".to_string(),
            PortalError::UserRejected(_) => "Request was rejected in the wallet".to_string(),
            PortalError::NoAccount => "Connect your wallet first".to_string(),
            PortalError::Validation(msg) => msg.clone(),
            PortalError::Rpc(_) | PortalError::Decoding(_) => {
                "The network request failed, please try again".to_string()
            }
            PortalError::Config(_) => "The application is misconfigured".to_string(),
        }
    }
}

/// EIP-1193 errors: code 4001 is a user rejection, everything else is an RPC failure.
impl From<ProviderError> for PortalError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            PortalError::UserRejected(err.message)
        } else {
            PortalError::Rpc(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<alloy_sol_types::Error> for PortalError {
    fn from(err: alloy_sol_types::Error) -> Self {
        PortalError::Decoding(format!("ABI error: {}", err))
    }
}
