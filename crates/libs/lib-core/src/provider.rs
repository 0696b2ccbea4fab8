//! # Wallet Provider Seam
//!
//! [`Eip1193Provider`] is the one call the page makes into an injected wallet:
//! `request({ method, params })`. The browser implementation lives in the web
//! crate; tests use an in-memory provider.
//!
//! The trait is `?Send` because the browser provider wraps a `JsValue` and all
//! work runs on the page's single thread.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// EIP-1193 error code for a request the user declined.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Error object returned by a provider (`{ code, message }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_CODE
    }
}

/// A wallet provider following the EIP-1193 `request` convention.
#[async_trait(?Send)]
pub trait Eip1193Provider {
    /// Send `method` with JSON `params` and return the raw JSON result.
    async fn request(&self, method: &str, params: Value) -> std::result::Result<Value, ProviderError>;
}

/// Send a request and deserialize the result into `T`.
pub async fn request_as<P, T>(provider: &P, method: &str, params: Value) -> Result<T>
where
    P: Eip1193Provider + ?Sized,
    T: DeserializeOwned,
{
    let value = provider.request(method, params).await?;
    Ok(serde_json::from_value(value)?)
}
