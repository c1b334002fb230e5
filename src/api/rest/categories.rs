//! Categories overview endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{bad_request, query_params, ApiResponse};
use crate::api::state::AppState;
use crate::listing::{matches_search, SUMMARY_SCHEMA};
use crate::types::SortDirection;

/// Query parameters for the categories overview
#[derive(Debug, Deserialize)]
pub struct CategoriesParams {
    /// Case-insensitive filter on the category name
    #[serde(default)]
    pub search: Option<String>,
    /// Sort by key, count, totalQuantity, totalValue or belowThresholdCount
    #[serde(rename = "sortBy", alias = "sortField", default = "default_sort")]
    pub sort_by: String,
    #[serde(rename = "sortOrder", alias = "sortDirection", default = "default_order")]
    pub sort_order: String,
    /// Low-stock threshold override
    #[serde(default)]
    pub threshold: Option<f64>,
}

fn default_sort() -> String {
    SUMMARY_SCHEMA.default_sort.to_string()
}

fn default_order() -> String {
    "asc".to_string()
}

/// GET /api/categories - Per-category counts, stock and value
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CategoriesParams>, QueryRejection>,
) -> Response {
    let params = match query_params(params) {
        Ok(params) => params,
        Err(response) => return response,
    };
    if !SUMMARY_SCHEMA.is_sortable(&params.sort_by) {
        return bad_request(format!("Cannot sort categories by '{}'", params.sort_by));
    }
    let direction = match params.sort_order.parse::<SortDirection>() {
        Ok(direction) => direction,
        Err(e) => return bad_request(e),
    };

    let threshold = params
        .threshold
        .unwrap_or(state.config.low_stock_threshold);
    let mut groups = state.catalog.categories(threshold, &params.sort_by, direction);

    let needle = params.search.unwrap_or_default().trim().to_lowercase();
    if !needle.is_empty() {
        groups.retain(|g| matches_search(g, &needle, SUMMARY_SCHEMA.search_fields));
    }

    let total = groups.len();
    (StatusCode::OK, Json(ApiResponse::with_total(groups, total))).into_response()
}
