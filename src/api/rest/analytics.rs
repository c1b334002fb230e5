//! Dashboard analytics endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{query_params, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for analytics
#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    /// Low-stock threshold override; bypasses the cache
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// GET /api/assets/analytics - Totals and breakdowns for the dashboard
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AnalyticsParams>, QueryRejection>,
) -> Response {
    let params = match query_params(params) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let stats = match params.threshold {
        Some(threshold) if threshold != state.config.low_stock_threshold => {
            state.compute_analytics(threshold)
        }
        _ => state.analytics(),
    };

    Json(ApiResponse::new(stats)).into_response()
}
