//! UI Components

pub mod navbar;
pub mod wave_card;

pub use navbar::Navbar;
pub use wave_card::WaveCard;
