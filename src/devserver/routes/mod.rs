//! Route handlers organized by resource.

pub mod climate;
pub mod health;
pub mod petition;
pub mod stories;
