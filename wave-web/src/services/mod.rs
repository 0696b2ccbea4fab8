//! Browser bindings

pub mod wallet;

pub use wallet::{BrowserProvider, TimerDelay};
