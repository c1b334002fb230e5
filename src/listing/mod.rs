//! Listing core: aggregation, filter/sort/paginate and the pagination window
//!
//! Everything here is pure and synchronous. Callers own the record set and
//! the [`ViewParameters`](crate::types::ViewParameters); each call derives a
//! fresh result.

mod aggregate;
mod compare;
mod page;
mod query;
mod state;
mod window;

pub use aggregate::{aggregate, dashboard, DEFAULT_LOW_STOCK_THRESHOLD};
pub use compare::{compare_by_field, compare_text, compare_values, sort_by_field};
pub use page::{compute_page, filter_and_sort, matches_filter, matches_search, search, total_pages};
pub use query::{normalize_page_size, ListQuery};
pub use state::ListView;
pub use window::{compute_window, SMALL_WINDOW_MAX};

/// Field names a list view can search, filter and sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSchema {
    pub search_fields: &'static [&'static str],
    pub filter_fields: &'static [&'static str],
    pub sort_fields: &'static [&'static str],
    pub default_sort: &'static str,
}

impl ListSchema {
    pub fn is_sortable(&self, field: &str) -> bool {
        self.sort_fields.contains(&field)
    }

    pub fn is_filterable(&self, field: &str) -> bool {
        self.filter_fields.contains(&field)
    }
}

/// Product table
pub const PRODUCT_SCHEMA: ListSchema = ListSchema {
    search_fields: &["name", "category", "brand", "serialNumber"],
    filter_fields: &["category", "department", "assetType", "status", "condition"],
    sort_fields: &[
        "name",
        "category",
        "department",
        "assetType",
        "status",
        "condition",
        "quantity",
        "price",
        "value",
        "createdAt",
    ],
    default_sort: "name",
};

/// Categories overview
pub const SUMMARY_SCHEMA: ListSchema = ListSchema {
    search_fields: &["key"],
    filter_fields: &[],
    sort_fields: &[
        "key",
        "count",
        "totalQuantity",
        "totalValue",
        "belowThresholdCount",
    ],
    default_sort: "key",
};
