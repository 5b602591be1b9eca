//! API Module
//!
//! gloo-net implementation of the Climate Paradox backend contract.

pub mod client;

pub use client::{get_api_base, GlooBackend};
