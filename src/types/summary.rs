//! Summary types for category and dashboard views

use serde::{Deserialize, Serialize};

use super::record::{FieldValue, Record};

/// Per-group totals produced by aggregation
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GroupSummary {
    pub key: String,
    pub count: usize,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: f64,
    #[serde(rename = "totalValue")]
    pub total_value: f64,
    #[serde(rename = "belowThresholdCount")]
    pub below_threshold_count: usize,
}

impl GroupSummary {
    /// Create an empty summary for a group key
    pub fn new(key: String) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }
}

impl Record for GroupSummary {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "key" | "name" => Some(FieldValue::Text(&self.key)),
            "count" => Some(FieldValue::Number(self.count as f64)),
            "totalQuantity" => Some(FieldValue::Number(self.total_quantity)),
            "totalValue" => Some(FieldValue::Number(self.total_value)),
            "belowThresholdCount" | "lowStock" => {
                Some(FieldValue::Number(self.below_threshold_count as f64))
            }
            _ => None,
        }
    }
}

/// Headline numbers and breakdowns for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardStats {
    #[serde(rename = "totalProducts")]
    pub total_products: usize,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: f64,
    #[serde(rename = "totalValue")]
    pub total_value: f64,
    #[serde(rename = "lowStockCount")]
    pub low_stock_count: usize,
    #[serde(rename = "recentCount")]
    pub recent_count: usize,
    #[serde(rename = "byCategory")]
    pub by_category: Vec<GroupSummary>,
    #[serde(rename = "byDepartment")]
    pub by_department: Vec<GroupSummary>,
    #[serde(rename = "byStatus")]
    pub by_status: Vec<GroupSummary>,
}
