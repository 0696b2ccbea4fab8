//! # Contract Gateway
//!
//! Wraps the three calls the page makes against the WavePortal contract:
//!
//! | Operation | Contract function | RPC |
//! |---|---|---|
//! | [`ContractGateway::read_total_count`] | `getTotalWaves()` | `eth_call` |
//! | [`ContractGateway::read_all_entries`] | `getAllWaves()` | `eth_call` |
//! | [`ContractGateway::submit_entry`] | `wave(string)` | `eth_sendTransaction` |
//!
//! The gateway holds no cache. Every write must be followed by fresh reads;
//! see [`crate::portal`].

use alloy_primitives::{hex, Address, Bytes, B256, U64};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use shared::{TxStatus, WaveEntry};
use tracing::{debug, info, instrument};

use crate::error::{PortalError, Result};
use crate::provider::{request_as, Eip1193Provider};

sol! {
    contract WavePortal {
        struct Wave {
            address waver;
            string message;
            uint256 timestamp;
        }

        function wave(string memory message) external;
        function getAllWaves() external view returns (Wave[] memory waves);
        function getTotalWaves() external view returns (uint256 total);
    }
}

/// Async pause between receipt polls.
///
/// The browser implementation sleeps on a JS timer.
#[async_trait(?Send)]
pub trait PollDelay {
    async fn delay(&self, millis: u32);
}

pub struct ContractGateway<'a, P: ?Sized> {
    provider: &'a P,
    address: Address,
    gas_limit: u64,
}

impl<'a, P: Eip1193Provider + ?Sized> ContractGateway<'a, P> {
    pub fn new(provider: &'a P, address: Address, gas_limit: u64) -> Self {
        Self {
            provider,
            address,
            gas_limit,
        }
    }

    /// Current value of the contract's wave counter.
    #[instrument(skip(self), fields(contract = %self.address))]
    pub async fn read_total_count(&self) -> Result<u64> {
        let data = self.call(WavePortal::getTotalWavesCall {}.abi_encode()).await?;
        let total = WavePortal::getTotalWavesCall::abi_decode_returns(&data, true)?.total;
        let total = u64::try_from(total)
            .map_err(|_| PortalError::Decoding(format!("Wave count {} does not fit in u64", total)))?;

        debug!("Retrieved total wave count: {}", total);
        Ok(total)
    }

    /// Every wave the contract has recorded, in the order it returns them.
    #[instrument(skip(self), fields(contract = %self.address))]
    pub async fn read_all_entries(&self) -> Result<Vec<WaveEntry>> {
        let data = self.call(WavePortal::getAllWavesCall {}.abi_encode()).await?;
        let waves = WavePortal::getAllWavesCall::abi_decode_returns(&data, true)?.waves;

        let entries = waves
            .into_iter()
            .map(wave_to_entry)
            .collect::<Result<Vec<_>>>()?;

        debug!("Retrieved {} wave(s)", entries.len());
        Ok(entries)
    }

    /// Send a `wave(message)` transaction from `from`.
    ///
    /// The returned handle is only `Submitted`; callers must [`PendingWave::wait`]
    /// before trusting updated counts.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Validation`] for an empty or whitespace message; nothing is sent
    /// - [`PortalError::UserRejected`] when the wallet prompt is declined
    /// - [`PortalError::Rpc`] when submission fails
    #[instrument(skip(self, message), fields(contract = %self.address))]
    pub async fn submit_entry(&self, from: Address, message: &str) -> Result<PendingWave<'a, P>> {
        validate_message(message)?;

        let data = WavePortal::waveCall {
            message: message.to_string(),
        }
        .abi_encode();

        let params = json!([{
            "from": from,
            "to": self.address,
            "gas": format!("0x{:x}", self.gas_limit),
            "data": Bytes::from(data),
        }]);

        let hash: B256 = request_as(self.provider, "eth_sendTransaction", params).await?;
        info!("Mining... {}", hash);

        Ok(PendingWave {
            provider: self.provider,
            hash,
        })
    }

    async fn call(&self, data: Vec<u8>) -> Result<Bytes> {
        let params = json!([
            {
                "to": self.address,
                "data": Bytes::from(data),
            },
            "latest"
        ]);
        request_as(self.provider, "eth_call", params).await
    }
}

/// Reject messages that are empty once whitespace is trimmed.
pub fn validate_message(message: &str) -> Result<()> {
    lib_utils::validate_not_empty(message, "Message").map_err(PortalError::Validation)
}

fn wave_to_entry(wave: WavePortal::Wave) -> Result<WaveEntry> {
    let seconds = u64::try_from(wave.timestamp)
        .map_err(|_| PortalError::Decoding(format!("Wave timestamp {} out of range", wave.timestamp)))?;
    let timestamp = lib_utils::from_unix_seconds(seconds)
        .map_err(|e| PortalError::Decoding(e.to_string()))?;

    Ok(WaveEntry::new(
        wave.waver.to_checksum(None),
        timestamp,
        wave.message,
    ))
}

/// A broadcast `wave` transaction that has not been mined yet.
pub struct PendingWave<'a, P: ?Sized> {
    provider: &'a P,
    hash: B256,
}

/// A mined `wave` transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveReceipt {
    pub hash: B256,
    pub block_number: Option<u64>,
    pub status: TxStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionReceipt {
    block_number: Option<U64>,
    status: Option<U64>,
}

impl<'a, P: Eip1193Provider + ?Sized> PendingWave<'a, P> {
    pub fn hash(&self) -> B256 {
        self.hash
    }

    pub fn status(&self) -> TxStatus {
        TxStatus::Submitted
    }

    /// Poll for the receipt every `interval_ms` until the transaction is mined.
    ///
    /// # Errors
    ///
    /// [`PortalError::Rpc`] if a poll fails or the transaction reverted.
    #[instrument(skip(self, delay), fields(hash = %self.hash))]
    pub async fn wait<D>(self, delay: &D, interval_ms: u32) -> Result<WaveReceipt>
    where
        D: PollDelay + ?Sized,
    {
        loop {
            let receipt: Option<TransactionReceipt> =
                request_as(self.provider, "eth_getTransactionReceipt", json!([self.hash])).await?;

            match receipt {
                // A receipt without a block number is still pending on some nodes
                Some(TransactionReceipt {
                    block_number: Some(block),
                    status,
                }) => {
                    if status == Some(U64::ZERO) {
                        return Err(PortalError::Rpc(format!(
                            "Transaction {} reverted",
                            hex::encode_prefixed(self.hash)
                        )));
                    }

                    info!("Mined -- {}", self.hash);
                    return Ok(WaveReceipt {
                        hash: self.hash,
                        block_number: u64::try_from(block).ok(),
                        status: TxStatus::Confirmed,
                    });
                }
                _ => delay.delay(interval_ms).await,
            }
        }
    }
}
