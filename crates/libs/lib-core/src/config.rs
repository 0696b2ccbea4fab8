//! # Application Configuration
//!
//! The contract address and transaction parameters are static: they are
//! resolved once at startup and validated to fail fast if misconfigured.
//!
//! ## Sources
//!
//! Every value has a default. Overrides are looked up by name through
//! [`Config::from_lookup`]; the browser build feeds it build-time variables:
//!
//! | Name | Field |
//! |---|---|
//! | `WAVE_PORTAL_CONTRACT` | [`Config::contract_address`] |
//! | `WAVE_PORTAL_GAS_LIMIT` | [`Config::gas_limit`] |
//! | `WAVE_PORTAL_POLL_MS` | [`Config::receipt_poll_interval_ms`] |
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::{core_config, init_config, Config};
//!
//! init_config(Config::default()).unwrap();
//! assert_eq!(core_config().gas_limit, 300_000);
//! ```

use std::sync::OnceLock;

use alloy_primitives::{address, Address};
use lib_utils::envs::{self, get_env_from, get_env_parse_from};

use crate::error::{PortalError, Result};

pub const CONTRACT_ADDRESS_ENV: &str = "WAVE_PORTAL_CONTRACT";
pub const GAS_LIMIT_ENV: &str = "WAVE_PORTAL_GAS_LIMIT";
pub const POLL_INTERVAL_ENV: &str = "WAVE_PORTAL_POLL_MS";

/// Deployed WavePortal contract.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("c6c3c2ac78073a56a19668ca86d23539f4282843");

/// Upper bound on gas accepted for a `wave` transaction.
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

pub const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Address of the WavePortal contract
    pub contract_address: Address,

    /// Gas limit attached to every `wave` transaction
    pub gas_limit: u64,

    /// Delay between `eth_getTransactionReceipt` polls while a wave is mining
    pub receipt_poll_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            gas_limit: DEFAULT_GAS_LIMIT,
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Build configuration from named overrides, falling back to defaults.
    ///
    /// A missing (or blank) value uses the default; a malformed one is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let contract_address = match get_env_from(&lookup, CONTRACT_ADDRESS_ENV) {
            Ok(raw) => raw.trim().parse::<Address>().map_err(|e| {
                PortalError::Config(format!("{} must be a 20-byte hex address: {}", CONTRACT_ADDRESS_ENV, e))
            })?,
            Err(envs::Error::MissingEnv(_)) => defaults.contract_address,
            Err(e) => return Err(PortalError::Config(e.to_string())),
        };

        let gas_limit = optional(get_env_parse_from(&lookup, GAS_LIMIT_ENV), defaults.gas_limit)?;
        let receipt_poll_interval_ms = optional(
            get_env_parse_from(&lookup, POLL_INTERVAL_ENV),
            defaults.receipt_poll_interval_ms,
        )?;

        Ok(Self {
            contract_address,
            gas_limit,
            receipt_poll_interval_ms,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.contract_address.is_zero() {
            return Err(PortalError::Config("Contract address cannot be the zero address".to_string()));
        }

        if self.gas_limit == 0 {
            return Err(PortalError::Config("Gas limit must be greater than 0".to_string()));
        }

        if self.receipt_poll_interval_ms == 0 {
            return Err(PortalError::Config("Receipt poll interval must be greater than 0".to_string()));
        }

        Ok(())
    }
}

fn optional<T>(value: std::result::Result<T, envs::Error>, default: T) -> Result<T> {
    match value {
        Ok(value) => Ok(value),
        Err(envs::Error::MissingEnv(_)) => Ok(default),
        Err(envs::Error::WrongFormat(name)) => {
            Err(PortalError::Config(format!("{} must be a positive number", name)))
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if validation fails or the config has already been set.
pub fn init_config(config: Config) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| PortalError::Config("Config has already been initialized".to_string()))
}

/// Get the global configuration, falling back to the defaults if
/// [`init_config()`] has not been called.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.contract_address.to_checksum(None),
            "0xC6c3c2AC78073a56a19668CA86D23539F4282843"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (CONTRACT_ADDRESS_ENV, "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            (GAS_LIMIT_ENV, "500000"),
            (POLL_INTERVAL_ENV, "250"),
        ]))
        .unwrap();

        assert_eq!(
            config.contract_address,
            address!("5fbdb2315678afecb367f032d93f642f64180aa3")
        );
        assert_eq!(config.gas_limit, 500_000);
        assert_eq!(config.receipt_poll_interval_ms, 250);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let bad_gas = Config::from_lookup(lookup_from(&[(GAS_LIMIT_ENV, "lots")]));
        assert!(matches!(bad_gas, Err(PortalError::Config(_))));

        let bad_address = Config::from_lookup(lookup_from(&[(CONTRACT_ADDRESS_ENV, "0x1234")]));
        assert!(matches!(bad_address, Err(PortalError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let zero_address = Config {
            contract_address: Address::ZERO,
            ..Config::default()
        };
        assert!(zero_address.validate().is_err());

        let zero_gas = Config {
            gas_limit: 0,
            ..Config::default()
        };
        assert!(zero_gas.validate().is_err());

        let zero_poll = Config {
            receipt_poll_interval_ms: 0,
            ..Config::default()
        };
        assert!(zero_poll.validate().is_err());
    }
}
