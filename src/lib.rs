//! Asset Inventory
//!
//! The data-shaping core of an IT asset inventory: group-by aggregation for
//! the categories and dashboard views, search/filter/sort/paginate for the
//! product table, and the pagination window with ellipses. A read-only REST
//! service exposes the same logic over the front end's query-string contract.
//!
//! # Modules
//!
//! - `types`: Core data structures (Product, GroupSummary, ViewParameters, PageResult)
//! - `listing`: Aggregation, list computation, pagination window, view reducer
//! - `catalog`: Immutable product set loaded from a JSON-lines file
//! - `api`: Axum router and REST handlers
//! - `config`: Environment-driven server settings
//! - `utils`: Search debouncer and caller-owned cache
//!
//! # Example
//!
//! ```
//! use asset_inventory::listing::{compute_page, compute_window, PRODUCT_SCHEMA};
//! use asset_inventory::types::{PageToken, Product, ViewParameters};
//!
//! let products: Vec<Product> = (0..25)
//!     .map(|i| Product::new(i.to_string(), format!("Laptop {:02}", i), "Laptop"))
//!     .collect();
//!
//! let params = ViewParameters::new("name").with_page(3, 10);
//! let page = compute_page(&products, &params, &PRODUCT_SCHEMA);
//! assert_eq!(page.items.len(), 5);
//! assert_eq!(page.total_pages, 3);
//!
//! let window = compute_window(params.page, page.total_pages);
//! assert_eq!(window, vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod listing;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use catalog::Catalog;
pub use config::ServerConfig;
pub use listing::{aggregate, compute_page, compute_window, ListSchema, ListView};
pub use types::{
    DashboardStats, GroupSummary, InventoryError, InventoryResult, PageResult, PageToken, Product,
    Record, SortDirection, Stocked, ViewAction, ViewParameters,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
