//! Page helpers

pub mod constants;
pub mod format;
