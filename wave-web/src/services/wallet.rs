//! Injected Ethereum provider via wasm-bindgen
//!
//! Binds `window.ethereum` (MetaMask and other EIP-1193 wallets) to
//! [`Eip1193Provider`], and a JS timer to [`PollDelay`].

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use lib_core::{Eip1193Provider, PollDelay, ProviderError};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// JSON-RPC "internal error", used when the JS side fails without a code.
const INTERNAL_ERROR_CODE: i64 = -32603;

#[wasm_bindgen(inline_js = "
export function detectEthereum() {
    return window.ethereum ? window.ethereum : null;
}

export async function ethereumRequest(ethereum, method, params) {
    return await ethereum.request({ method: method, params: params });
}
")]
extern "C" {
    /// `window.ethereum`, or `null` when no wallet is installed
    #[wasm_bindgen(js_name = detectEthereum)]
    fn detect_ethereum() -> JsValue;

    /// `ethereum.request({ method, params })`
    #[wasm_bindgen(js_name = ethereumRequest, catch)]
    async fn ethereum_request(ethereum: &JsValue, method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// The wallet provider injected into the page.
#[derive(Clone)]
pub struct BrowserProvider {
    ethereum: JsValue,
}

impl BrowserProvider {
    /// Look up `window.ethereum`.
    pub fn detect() -> Option<Self> {
        let ethereum = detect_ethereum();
        if ethereum.is_null() || ethereum.is_undefined() {
            log::debug!("No ethereum object on window");
            None
        } else {
            Some(Self { ethereum })
        }
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for BrowserProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::new(INTERNAL_ERROR_CODE, e.to_string()))?;

        let result = ethereum_request(&self.ethereum, method, params)
            .await
            .map_err(to_provider_error)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::new(INTERNAL_ERROR_CODE, e.to_string()))
    }
}

/// Read `{ code, message }` off a thrown provider error.
fn to_provider_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64)
        .unwrap_or(INTERNAL_ERROR_CODE);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("Provider error: {:?}", err));

    ProviderError::new(code, message)
}

/// Receipt poll delay backed by `setTimeout`.
pub struct TimerDelay;

#[async_trait(?Send)]
impl PollDelay for TimerDelay {
    async fn delay(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
