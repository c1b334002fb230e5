//! Product (inventory asset) record

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FieldValue, Record, Stocked};

/// An inventory item or asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "assetType", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "serialNumber", default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "active".to_string()
}

impl Product {
    /// Create a product with the given identity and stock figures
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            department: None,
            asset_type: None,
            status: default_status(),
            condition: None,
            serial_number: None,
            brand: None,
            quantity: 0.0,
            price: 0.0,
            created_at: None,
        }
    }

    pub fn with_stock(mut self, quantity: f64, price: f64) -> Self {
        self.quantity = quantity;
        self.price = price;
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Whether the product was created within `window` of `now` (the "new" badge)
    pub fn is_recent(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.created_at {
            Some(created) => created <= now && now - created <= window,
            None => false,
        }
    }

    /// Category used for grouping; blank categories land in "Uncategorized"
    pub fn category_key(&self) -> String {
        non_blank_or(&self.category, "Uncategorized")
    }

    pub fn department_key(&self) -> String {
        non_blank_or(self.department.as_deref().unwrap_or(""), "Unassigned")
    }

    pub fn status_key(&self) -> String {
        non_blank_or(&self.status, "unknown")
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if is_blank(value) {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Blank values count as missing for filtering, sorting and grouping alike
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Record for Product {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "category" if !is_blank(&self.category) => Some(FieldValue::Text(&self.category)),
            "department" => self.department.as_deref().map(FieldValue::Text),
            "assetType" => self.asset_type.as_deref().map(FieldValue::Text),
            "status" if !is_blank(&self.status) => Some(FieldValue::Text(&self.status)),
            "condition" => self.condition.as_deref().map(FieldValue::Text),
            "serialNumber" => self.serial_number.as_deref().map(FieldValue::Text),
            "brand" => self.brand.as_deref().map(FieldValue::Text),
            "quantity" => Some(FieldValue::Number(self.quantity)),
            "price" => Some(FieldValue::Number(self.price)),
            "value" => Some(FieldValue::Number(self.value())),
            "createdAt" => self
                .created_at
                .map(|t| FieldValue::Number(t.timestamp_millis() as f64)),
            _ => None,
        }
    }
}

impl Stocked for Product {
    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn price(&self) -> f64 {
        self.price
    }
}
