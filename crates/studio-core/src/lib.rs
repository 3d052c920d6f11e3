//! Studio Core
//!
//! Browser-independent half of the decor studio UI: API records, display
//! defaults, case pagination state, star ratings and appointment form
//! validation. The Leptos crate renders what this crate derives.

pub mod config;
pub mod copy;
pub mod display;
pub mod form;
pub mod models;
pub mod query;
pub mod rating;
pub mod state;
