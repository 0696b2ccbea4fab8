//! # Utilities Library
//!
//! Shared utility functions for build-time variables, time and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env_from, get_env_parse_from};
pub use time::{format_display, format_time, from_unix_seconds};
pub use validation::validate_not_empty;
