//! Global page state

pub mod portal;
