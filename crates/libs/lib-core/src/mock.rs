//! In-memory wallet provider and view for unit tests.
//!
//! `MockProvider` behaves like a wallet connected to a node running the
//! WavePortal contract: reads are ABI-encoded from its wave list and a sent
//! `wave` is appended once its receipt has been polled for.

use std::cell::{Cell, RefCell};

use alloy_primitives::{address, Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::contract::{PollDelay, WavePortal};
use crate::portal::{PortalState, PortalView};
use crate::provider::{Eip1193Provider, ProviderError, USER_REJECTED_CODE};

pub(crate) const ALICE: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
pub(crate) const BOB: Address = address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc");
pub(crate) const CONTRACT: Address = address!("c6c3c2ac78073a56a19668ca86d23539f4282843");

struct PendingTx {
    hash: B256,
    from: Address,
    message: String,
    polls_left: u32,
}

#[derive(Default)]
pub(crate) struct MockProvider {
    authorized: RefCell<Vec<Address>>,
    wallet_accounts: Vec<Address>,
    reject_prompts: bool,
    fail_calls: bool,
    empty_call_data: bool,
    revert: bool,
    polls_before_mined: u32,
    waves: RefCell<Vec<(Address, String, u64)>>,
    pending: RefCell<Vec<PendingTx>>,
    sent: RefCell<Vec<Value>>,
    tx_counter: Cell<u8>,
    calls: RefCell<Vec<String>>,
}

impl MockProvider {
    pub(crate) const BLOCK_NUMBER: u64 = 16;

    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Timestamp the mock assigns to the wave at `index`.
    pub(crate) fn timestamp_of(index: usize) -> u64 {
        1_700_000_000 + 60 * index as u64
    }

    /// Account the wallet grants on `eth_requestAccounts`.
    pub(crate) fn with_wallet_account(mut self, account: Address) -> Self {
        self.wallet_accounts.push(account);
        self
    }

    /// Account already authorized for the page (returned by `eth_accounts`).
    pub(crate) fn with_authorized_account(self, account: Address) -> Self {
        self.authorized.borrow_mut().push(account);
        self.with_wallet_account(account)
    }

    pub(crate) fn with_wave(self, waver: Address, message: &str) -> Self {
        {
            let mut waves = self.waves.borrow_mut();
            let timestamp = Self::timestamp_of(waves.len());
            waves.push((waver, message.to_string(), timestamp));
        }
        self
    }

    /// Receipt polls answered with `null` before a transaction is mined.
    pub(crate) fn mined_after_polls(mut self, polls: u32) -> Self {
        self.polls_before_mined = polls;
        self
    }

    /// Decline every wallet prompt with code 4001.
    pub(crate) fn rejecting_prompts(mut self) -> Self {
        self.reject_prompts = true;
        self
    }

    pub(crate) fn failing_calls(mut self) -> Self {
        self.fail_calls = true;
        self
    }

    pub(crate) fn returning_empty_call_data(mut self) -> Self {
        self.empty_call_data = true;
        self
    }

    /// Mine transactions with a failed status.
    pub(crate) fn reverting(mut self) -> Self {
        self.revert = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn last_transaction(&self) -> Option<Value> {
        self.sent.borrow().last().cloned()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    fn contract_waves(&self) -> Vec<WavePortal::Wave> {
        self.waves
            .borrow()
            .iter()
            .map(|(waver, message, timestamp)| WavePortal::Wave {
                waver: *waver,
                message: message.clone(),
                timestamp: U256::from(*timestamp),
            })
            .collect()
    }

    fn eth_call(&self, params: &Value) -> Result<Value, ProviderError> {
        let data: Bytes = serde_json::from_value(params[0]["data"].clone()).unwrap();
        let selector: [u8; 4] = data[..4].try_into().unwrap();

        let encoded = if selector == WavePortal::getTotalWavesCall::SELECTOR {
            self.record("eth_call:getTotalWaves");
            let total = U256::from(self.waves.borrow().len());
            WavePortal::getTotalWavesCall::abi_encode_returns(&(total,))
        } else if selector == WavePortal::getAllWavesCall::SELECTOR {
            self.record("eth_call:getAllWaves");
            WavePortal::getAllWavesCall::abi_encode_returns(&(self.contract_waves(),))
        } else {
            self.record("eth_call");
            return Err(ProviderError::new(-32000, "execution reverted"));
        };

        if self.fail_calls {
            return Err(ProviderError::new(-32603, "Internal JSON-RPC error."));
        }
        if self.empty_call_data {
            return Ok(json!("0x"));
        }
        Ok(json!(Bytes::from(encoded)))
    }

    fn send_transaction(&self, params: &Value) -> Result<Value, ProviderError> {
        let tx = params[0].clone();
        self.sent.borrow_mut().push(tx.clone());

        if self.reject_prompts {
            return Err(ProviderError::new(
                USER_REJECTED_CODE,
                "MetaMask Tx Signature: User denied transaction signature.",
            ));
        }

        let from: Address = serde_json::from_value(tx["from"].clone()).unwrap();
        let data: Bytes = serde_json::from_value(tx["data"].clone()).unwrap();
        let call = WavePortal::waveCall::abi_decode(&data, true).unwrap();

        self.tx_counter.set(self.tx_counter.get() + 1);
        let hash = B256::with_last_byte(self.tx_counter.get());

        self.pending.borrow_mut().push(PendingTx {
            hash,
            from,
            message: call.message,
            polls_left: self.polls_before_mined,
        });
        Ok(json!(hash))
    }

    fn receipt(&self, params: &Value) -> Result<Value, ProviderError> {
        let hash: B256 = serde_json::from_value(params[0].clone()).unwrap();
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .position(|tx| tx.hash == hash)
            .ok_or_else(|| ProviderError::new(-32000, "unknown transaction"))?;

        if pending[index].polls_left > 0 {
            pending[index].polls_left -= 1;
            return Ok(Value::Null);
        }

        let tx = pending.remove(index);
        let status = if self.revert {
            "0x0"
        } else {
            let mut waves = self.waves.borrow_mut();
            let timestamp = Self::timestamp_of(waves.len());
            waves.push((tx.from, tx.message, timestamp));
            "0x1"
        };

        Ok(json!({
            "transactionHash": tx.hash,
            "blockNumber": format!("0x{:x}", Self::BLOCK_NUMBER),
            "status": status,
        }))
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        match method {
            "eth_accounts" => {
                self.record(method);
                Ok(json!(*self.authorized.borrow()))
            }
            "eth_requestAccounts" => {
                self.record(method);
                if self.reject_prompts {
                    return Err(ProviderError::new(USER_REJECTED_CODE, "User rejected the request."));
                }
                *self.authorized.borrow_mut() = self.wallet_accounts.clone();
                Ok(json!(self.wallet_accounts))
            }
            "eth_call" => self.eth_call(&params),
            "eth_sendTransaction" => {
                self.record(method);
                self.send_transaction(&params)
            }
            "eth_getTransactionReceipt" => {
                self.record(method);
                self.receipt(&params)
            }
            _ => {
                self.record(method);
                Err(ProviderError::new(-32601, "Method not found"))
            }
        }
    }
}

/// Poll delay that returns immediately.
pub(crate) struct NoDelay;

#[async_trait(?Send)]
impl PollDelay for NoDelay {
    async fn delay(&self, _millis: u32) {}
}

/// Poll delay that yields to the runtime once, letting other futures run.
pub(crate) struct YieldDelay;

#[async_trait(?Send)]
impl PollDelay for YieldDelay {
    async fn delay(&self, _millis: u32) {
        tokio::task::yield_now().await;
    }
}

/// View keeping state in a `RefCell` and recording alerts.
#[derive(Default)]
pub(crate) struct RecordingView {
    state: RefCell<PortalState>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingView {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl PortalView for RecordingView {
    fn read<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut PortalState)) {
        f(&mut self.state.borrow_mut())
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
