//! Catalog - the read-only product set behind the REST API
//!
//! The catalog is loaded once and never mutated; list, category and
//! analytics queries delegate to the pure functions in [`crate::listing`].

mod loader;

pub use loader::{load_products, parse_products};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::listing::{aggregate, compute_page, dashboard, sort_by_field, PRODUCT_SCHEMA};
use crate::types::{
    DashboardStats, GroupSummary, InventoryResult, PageResult, Product, SortDirection,
    ViewParameters,
};

/// Immutable product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    source: Option<PathBuf>,
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products already in memory
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            source: None,
            products,
        }
    }

    /// Load a catalog from a JSON-lines file
    pub fn load(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref();
        let products = load_products(path)?;
        info!(path = %path.display(), products = products.len(), "catalog loaded");

        Ok(Self {
            source: Some(path.to_path_buf()),
            products,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// File the catalog was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// One page of the product table
    pub fn list_products(&self, params: &ViewParameters) -> PageResult<Product> {
        compute_page(&self.products, params, &PRODUCT_SCHEMA)
    }

    /// Category summaries, sorted by `sort_field`
    pub fn categories(
        &self,
        low_stock_threshold: f64,
        sort_field: &str,
        direction: SortDirection,
    ) -> Vec<GroupSummary> {
        let mut groups = aggregate(&self.products, Product::category_key, low_stock_threshold);
        sort_by_field(&mut groups, sort_field, direction);
        groups
    }

    /// Dashboard figures as of `now`
    pub fn analytics(
        &self,
        low_stock_threshold: f64,
        now: DateTime<Utc>,
        recent_window: Duration,
    ) -> DashboardStats {
        dashboard(&self.products, low_stock_threshold, now, recent_window)
    }
}
