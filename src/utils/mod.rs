//! Utility functions and helpers.

pub mod debounce;
pub mod http;

pub use debounce::Debouncer;
