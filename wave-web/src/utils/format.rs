//! # Formatting Utilities for the Wave Page
//!
//! For address formatting, use [`shared::utils::truncate_address`].

use chrono::{DateTime, Utc};

/// Format a count with commas (e.g., 1234567 -> "1,234,567")
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// "1 wave", "2 waves", "1,024 waves"
pub fn format_wave_count(count: u64) -> String {
    let noun = if count == 1 { "wave" } else { "waves" };
    format!("{} {}", format_number(count), noun)
}

pub fn format_wave_time(timestamp: &DateTime<Utc>) -> String {
    lib_utils::format_display(*timestamp)
}
