//! Data types for the asset inventory
//!
//! This module contains all the core data structures used throughout the application.

mod product;
mod record;
mod summary;
mod view;

pub use product::Product;
pub use record::{FieldValue, Record, Stocked};
pub use summary::{DashboardStats, GroupSummary};
pub use view::{
    PageResult, PageToken, SortDirection, ViewAction, ViewParameters, ALL, DEFAULT_PAGE_SIZE,
    PAGE_SIZES,
};

use thiserror::Error;

/// Errors raised outside the pure listing core (loading, configuration, requests)
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value '{value}' for {key}")]
    Config { key: String, value: String },

    #[error("invalid query parameter {key}: '{value}'")]
    InvalidQuery { key: String, value: String },
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
