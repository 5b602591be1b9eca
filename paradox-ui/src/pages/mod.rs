//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod dashboard;
pub mod data;
pub mod petition;
pub mod stories;

pub use about::About;
pub use dashboard::Dashboard;
pub use data::Data;
pub use petition::Petition;
pub use stories::Stories;
