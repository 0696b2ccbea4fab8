//! Page modules

pub mod portal;

pub use portal::PortalPage;
