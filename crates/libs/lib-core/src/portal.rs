//! # Portal Orchestration
//!
//! Drives the page: the on-load account check and reads, connecting a wallet,
//! and the wave write cycle.
//!
//! ## Write cycle
//!
//! ```text
//! Idle ──wave()──▶ Submitting ──tx broadcast──▶ Mining ──receipt──▶ re-read ──▶ Idle
//!   ▲                  │                          │
//!   └──────────────────┴──────── any error ───────┘
//! ```
//!
//! `wave()` is ignored unless the phase is `Idle`. The phase is checked and
//! moved to `Submitting` before the first await, so it is the only guard
//! needed against a second submission on the page's single thread.
//!
//! ## Error policy
//!
//! Every error is logged here and swallowed: nothing is retried and the view
//! keeps its previous state. The only user-facing message is the alert shown
//! when connecting without a wallet installed.

use alloy_primitives::Address;
use shared::WaveEntry;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::contract::{validate_message, ContractGateway, PollDelay, WaveReceipt};
use crate::error::{PortalError, Result};
use crate::provider::Eip1193Provider;
use crate::wallet::WalletAdapter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePhase {
    #[default]
    Idle,
    /// Waiting for the wallet to sign and broadcast
    Submitting,
    /// Broadcast, waiting for the receipt
    Mining,
}

impl WritePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, WritePhase::Idle)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            WritePhase::Mining => "Mining...",
            WritePhase::Idle | WritePhase::Submitting => "Wave at me",
        }
    }
}

/// Everything the page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalState {
    pub account: Option<Address>,
    pub wave_count: u64,
    /// Replaced wholesale on every refresh
    pub entries: Vec<WaveEntry>,
    pub phase: WritePhase,
}

/// Owner of the [`PortalState`] the orchestration reads and writes.
///
/// The browser keeps it in a reactive signal; tests keep it in a `RefCell`.
pub trait PortalView {
    fn read<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R;

    fn update(&self, f: impl FnOnce(&mut PortalState));

    /// Show a blocking message to the user.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveOutcome {
    /// Another wave was still in flight
    Ignored,
    Confirmed(WaveReceipt),
    Failed(PortalError),
}

pub struct Portal<P, V, D> {
    wallet: WalletAdapter<P>,
    config: Config,
    view: V,
    delay: D,
}

impl<P, V, D> Portal<P, V, D>
where
    P: Eip1193Provider,
    V: PortalView,
    D: PollDelay,
{
    pub fn new(wallet: WalletAdapter<P>, config: Config, view: V, delay: D) -> Self {
        Self {
            wallet,
            config,
            view,
            delay,
        }
    }

    pub fn wallet(&self) -> &WalletAdapter<P> {
        &self.wallet
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn gateway(&self) -> Result<ContractGateway<'_, P>> {
        let provider = self.wallet.provider()?;
        Ok(ContractGateway::new(
            provider,
            self.config.contract_address,
            self.config.gas_limit,
        ))
    }

    /// Page load: silent account check, then the wave count, then the entry
    /// list if an account is already authorized.
    pub async fn load(&self) {
        match self.wallet.current_accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(account) => {
                    info!("Found an authorized account: {}", account);
                    let account = *account;
                    self.view.update(|state| state.account = Some(account));
                }
                None => info!("No authorized account found"),
            },
            Err(e) => warn!("Account check failed: {}", e),
        }

        if let Err(e) = self.refresh_count().await {
            warn!("Failed to read wave count: {}", e);
        }

        if self.view.read(|state| state.account.is_some()) {
            if let Err(e) = self.refresh_entries().await {
                warn!("Failed to read waves: {}", e);
            }
        }
    }

    /// Ask the wallet for account access and load the entry list.
    pub async fn connect(&self) {
        if self.wallet.detect_provider().is_none() {
            warn!("Connect requested without a wallet provider");
            self.view.alert(&PortalError::NoProvider.user_message());
            return;
        }

        let account = match self.wallet.request_accounts().await {
            Ok(accounts) => accounts.into_iter().next(),
            Err(e) => {
                warn!("Connect failed: {}", e);
                return;
            }
        };

        let Some(account) = account else {
            warn!("Wallet granted no accounts");
            return;
        };

        info!("Connected --> {}", account);
        self.view.update(|state| state.account = Some(account));

        if let Err(e) = self.refresh_entries().await {
            warn!("Failed to read waves: {}", e);
        }
    }

    /// Submit `message` as a wave and wait for it to be mined.
    ///
    /// Returns [`WaveOutcome::Ignored`] without touching anything if a wave is
    /// already in flight.
    pub async fn wave(&self, message: &str) -> WaveOutcome {
        if !self.view.read(|state| state.phase.is_idle()) {
            debug!("Wave already in flight, ignoring");
            return WaveOutcome::Ignored;
        }
        self.set_phase(WritePhase::Submitting);

        let outcome = match self.submit_and_confirm(message).await {
            Ok(receipt) => {
                if let Err(e) = self.refresh_count().await {
                    warn!("Failed to read wave count: {}", e);
                }
                if let Err(e) = self.refresh_entries().await {
                    warn!("Failed to read waves: {}", e);
                }
                WaveOutcome::Confirmed(receipt)
            }
            Err(e) => {
                warn!("Wave failed: {}", e);
                WaveOutcome::Failed(e)
            }
        };

        self.set_phase(WritePhase::Idle);
        outcome
    }

    async fn submit_and_confirm(&self, message: &str) -> Result<WaveReceipt> {
        validate_message(message)?;

        let gateway = self.gateway()?;
        let from = self.sender().await?;

        let count = gateway.read_total_count().await?;
        self.view.update(|state| state.wave_count = count);

        let pending = gateway.submit_entry(from, message).await?;
        debug!("Wave {} --> {}", pending.status().label(), pending.hash());
        self.set_phase(WritePhase::Mining);

        pending
            .wait(&self.delay, self.config.receipt_poll_interval_ms)
            .await
    }

    /// The stored account, else the first silently authorized one.
    async fn sender(&self) -> Result<Address> {
        if let Some(account) = self.view.read(|state| state.account) {
            return Ok(account);
        }

        let account = self
            .wallet
            .current_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or(PortalError::NoAccount)?;

        self.view.update(|state| state.account = Some(account));
        Ok(account)
    }

    /// Re-read the wave count into the view.
    pub async fn refresh_count(&self) -> Result<u64> {
        let count = self.gateway()?.read_total_count().await?;
        self.view.update(|state| state.wave_count = count);
        Ok(count)
    }

    /// Re-read the full entry list into the view, replacing the old one.
    pub async fn refresh_entries(&self) -> Result<usize> {
        let entries = self.gateway()?.read_all_entries().await?;
        let len = entries.len();
        self.view.update(|state| state.entries = entries);
        Ok(len)
    }

    fn set_phase(&self, phase: WritePhase) {
        self.view.update(|state| state.phase = phase);
    }
}
