//! Query-string contract for server-paginated lists
//!
//! The client serializes [`ViewParameters`] with [`ViewParameters::to_query_string`];
//! the server reads the same names back through [`ListQuery`].

use serde::Deserialize;

use crate::types::{
    InventoryError, InventoryResult, SortDirection, ViewParameters, ALL, DEFAULT_PAGE_SIZE,
    PAGE_SIZES,
};

use super::ListSchema;

impl ViewParameters {
    /// Query pairs in wire order: search, active filters, sort, page, limit
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        let search = self.search_text.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }
        for (name, value) in self.active_filters() {
            pairs.push((name.to_string(), value.to_string()));
        }
        pairs.push(("sortField".to_string(), self.sort_field.clone()));
        pairs.push(("sortOrder".to_string(), self.sort_direction.to_string()));
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.page_size.to_string()));

        pairs
    }

    /// Percent-encoded query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Query parameters accepted by list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(rename = "assetType", default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(rename = "sortField", alias = "sortBy", default)]
    pub sort_field: Option<String>,
    #[serde(rename = "sortOrder", alias = "sortDirection", default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListQuery {
    fn filter_values(&self) -> [(&'static str, Option<&String>); 5] {
        [
            ("category", self.category.as_ref()),
            ("department", self.department.as_ref()),
            ("assetType", self.asset_type.as_ref()),
            ("status", self.status.as_ref()),
            ("condition", self.condition.as_ref()),
        ]
    }

    /// Validate against `schema` and build view parameters.
    ///
    /// Unknown sort fields and directions are rejected; filters the schema does
    /// not list are ignored; page and limit are normalized.
    pub fn into_view_parameters(self, schema: &ListSchema) -> InventoryResult<ViewParameters> {
        let mut params = ViewParameters::new(schema.default_sort);

        if let Some(field) = self.sort_field.as_deref().filter(|f| !f.is_empty()) {
            if !schema.is_sortable(field) {
                return Err(InventoryError::InvalidQuery {
                    key: "sortField".to_string(),
                    value: field.to_string(),
                });
            }
            params.sort_field = field.to_string();
        }

        if let Some(order) = self.sort_order.as_deref().filter(|o| !o.is_empty()) {
            params.sort_direction =
                order
                    .parse::<SortDirection>()
                    .map_err(|_| InventoryError::InvalidQuery {
                        key: "sortOrder".to_string(),
                        value: order.to_string(),
                    })?;
        }

        for (name, value) in self.filter_values() {
            if let Some(value) = value {
                if schema.is_filterable(name) && value != ALL && !value.is_empty() {
                    params.filters.insert(name.to_string(), value.clone());
                }
            }
        }

        params.search_text = self.search.unwrap_or_default();
        params.page = self.page.unwrap_or(1).max(1);
        params.page_size = normalize_page_size(self.limit.unwrap_or(DEFAULT_PAGE_SIZE));

        Ok(params)
    }
}

/// Snap a requested page size onto the allowed set: the smallest allowed size
/// not below the request, capped at the largest. Zero means the default.
pub fn normalize_page_size(requested: usize) -> usize {
    if requested == 0 {
        return DEFAULT_PAGE_SIZE;
    }
    PAGE_SIZES
        .iter()
        .copied()
        .find(|&size| size >= requested)
        .unwrap_or(PAGE_SIZES[PAGE_SIZES.len() - 1])
}
