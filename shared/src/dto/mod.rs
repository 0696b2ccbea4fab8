//! # Data Transfer Objects (DTOs)
//!
//! Plain data handed from the contract gateway to the view layer.
//!
//! ## Module Organization
//!
//! - [`wave`] - Wave entries and transaction status
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Timestamps**: RFC 3339 via `chrono`'s serde support
//!
//! ```text
//! {
//!   "sender_address": "0xC6c3c2AC78073a56a19668CA86D23539F4282843",
//!   "timestamp": "2023-11-14T22:13:20Z",
//!   "message": "hello"
//! }
//! ```

pub mod wave;

pub use wave::*;
