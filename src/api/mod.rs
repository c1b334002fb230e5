//! API module for HTTP endpoints
//!
//! This module provides the REST API the inventory front end reads from.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
