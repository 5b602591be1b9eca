//! State Management
//!
//! Per-page load state and form flows as Leptos signals. Nothing is global
//! apart from the read-only backend handle in context.

pub mod form;
pub mod page;

#[cfg(test)]
pub(crate) mod testing;

pub use form::FormHandle;
pub use page::{use_backend, use_page, PageHandle};
