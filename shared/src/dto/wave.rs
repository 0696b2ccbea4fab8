//! # Wave Data Transfer Objects
//!
//! Values read from, and written to, the WavePortal contract once they have been
//! decoded out of the ABI layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single wave recorded by the contract.
///
/// Entries are immutable: the front-end never edits one, it only replaces the
/// whole list with a fresh read from the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveEntry {
    /// Checksummed address of the account that sent the wave
    pub sender_address: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl WaveEntry {
    pub fn new(sender_address: String, timestamp: DateTime<Utc>, message: String) -> Self {
        Self {
            sender_address,
            timestamp,
            message,
        }
    }
}

/// Lifecycle of a wave transaction.
///
/// A handle starts out `Submitted` once the wallet has broadcast it and becomes
/// `Confirmed` when a receipt is available. It is dropped after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Submitted,
    Confirmed,
}

impl TxStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Submitted => "submitted",
            TxStatus::Confirmed => "confirmed",
        }
    }
}
