//! # Shared Wave Portal Types
//!
//! Types and helpers used by both the core library and the web front-end.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data carried from the contract gateway to the view
//!   - **[`dto::wave`]**: [`WaveEntry`] and [`TxStatus`]
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten an address for display
//!   - **[`utils::truncate_address`]**: Shorten with the default widths
//!
//! ## Usage
//!
//! ```rust
//! use shared::{truncate_address, WaveEntry};
//! use chrono::DateTime;
//!
//! let entry = WaveEntry::new(
//!     "0xC6c3c2AC78073a56a19668CA86D23539F4282843".to_string(),
//!     DateTime::from_timestamp(0, 0).unwrap(),
//!     "gm".to_string(),
//! );
//! assert_eq!(truncate_address(&entry.sender_address), "0xC6c3...2843");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
