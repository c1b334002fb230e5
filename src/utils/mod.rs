//! Utility functions and helpers
//!
//! This module contains the search debouncer and the view-model cache.

pub mod cache;
pub mod debounce;

pub use cache::{Cached, InvalidationPolicy, Manual, TimeToLive};
pub use debounce::{schedule, DebounceHandle, Debouncer, DEFAULT_DEBOUNCE};
