//! Group-by aggregation for the categories and dashboard views

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::types::{DashboardStats, GroupSummary, Product, Stocked};

/// Stock level below which a record counts as "low stock"
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 20.0;

/// Group `records` by `key_fn` in a single pass.
///
/// Groups come out in the order their key was first seen; sort afterwards
/// with [`sort_by_field`](super::sort_by_field) if another order is needed.
pub fn aggregate<R, F>(records: &[R], key_fn: F, low_stock_threshold: f64) -> Vec<GroupSummary>
where
    R: Stocked,
    F: Fn(&R) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<GroupSummary> = Vec::new();

    for record in records {
        let key = key_fn(record);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push(GroupSummary::new(key.clone()));
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };

        let group = &mut groups[slot];
        group.count += 1;
        group.total_quantity += record.quantity();
        group.total_value += record.value();
        if record.quantity() < low_stock_threshold {
            group.below_threshold_count += 1;
        }
    }

    groups
}

/// Build the dashboard figures for a set of products
pub fn dashboard(
    products: &[Product],
    low_stock_threshold: f64,
    now: DateTime<Utc>,
    recent_window: Duration,
) -> DashboardStats {
    let by_category = aggregate(products, Product::category_key, low_stock_threshold);

    DashboardStats {
        total_products: products.len(),
        total_quantity: by_category.iter().map(|g| g.total_quantity).sum(),
        total_value: by_category.iter().map(|g| g.total_value).sum(),
        low_stock_count: by_category.iter().map(|g| g.below_threshold_count).sum(),
        recent_count: products
            .iter()
            .filter(|p| p.is_recent(now, recent_window))
            .count(),
        by_department: aggregate(products, Product::department_key, low_stock_threshold),
        by_status: aggregate(products, Product::status_key, low_stock_threshold),
        by_category,
    }
}
