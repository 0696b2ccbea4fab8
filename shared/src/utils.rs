//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for shortening `0x`-prefixed account addresses for display:
//! - [`format_address`] - Keep the first N and last M characters
//! - [`truncate_address`] - `format_address` with the default widths
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xC6c3c2AC78073a56a19668CA86D23539F4282843";
//! assert_eq!(format_address(address, 6, 4), "0xC6c3...2843");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// The `0x` prefix counts towards `prefix_len`. Addresses too short to shorten
/// are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xC6c3c2AC78073a56a19668CA86D23539F4282843";
/// assert_eq!(format_address(addr, 6, 4), "0xC6c3...2843");
/// assert_eq!(format_address(addr, 10, 8), "0xC6c3c2AC...F4282843");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Hex addresses are ASCII, but guard the slice boundaries anyway
    if address_len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(address_len - suffix_len)
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address with a 6-character prefix (`0x` plus four digits) and a 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0xC6c3c2AC78073a56a19668CA86D23539F4282843"), "0xC6c3...2843");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xC6c3c2AC78073a56a19668CA86D23539F4282843";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0xC6c3...2843");
        assert_eq!(format_address(ADDR, 2, 2), "0x...43");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1234", 6, 4), "0x1234");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_non_ascii_is_left_alone() {
        assert_eq!(format_address("ééééééééééé", 3, 3), "ééééééééééé");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0xC6c3...2843");
    }
}
