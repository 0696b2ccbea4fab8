//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty or whitespace only.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hello", "Message").is_ok());
        assert_eq!(
            validate_not_empty("", "Message").unwrap_err(),
            "Message cannot be empty"
        );
        assert!(validate_not_empty(" \t\n ", "Message").is_err());
    }
}
