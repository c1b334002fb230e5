//! REST API module for HTTP endpoints
//!
//! Provides the read-only endpoints the inventory front end consumes:
//! - `GET /api/products` - Product table, server-paginated
//! - `GET /api/products/:id` - Single product
//! - `GET /api/categories` - Category summaries
//! - `GET /api/assets/analytics` - Dashboard figures

pub mod analytics;
pub mod categories;
pub mod products;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::types::PageToken;

/// Pagination metadata for list responses
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    /// Page buttons to render
    pub window: Vec<PageToken>,
}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    #[serde(rename = "hasActiveFilters", skip_serializing_if = "Option::is_none")]
    pub has_active_filters: Option<bool>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            total: None,
            pagination: None,
            has_active_filters: None,
        }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            total: Some(total),
            ..Self::new(data)
        }
    }

    pub fn paginated(data: T, pagination: PaginationMeta, has_active_filters: bool) -> Self {
        Self {
            total: Some(pagination.total),
            pagination: Some(pagination),
            has_active_filters: Some(has_active_filters),
            ..Self::new(data)
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}

/// 400 response with an [`ApiError`] body
pub fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(message))).into_response()
}

/// Unwrap query parameters, answering malformed ones with a JSON 400
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Response> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => Err(bad_request(rejection.body_text())),
    }
}
