//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::{bad_request, query_params, ApiError, ApiResponse, PaginationMeta};
use crate::api::state::AppState;
use crate::listing::{compute_window, ListQuery, PRODUCT_SCHEMA};

/// GET /api/products - Search, filter, sort and paginate the product table
///
/// Accepts `search`, `category`, `department`, `assetType`, `status`,
/// `condition`, `sortField` (or `sortBy`), `sortOrder` (or `sortDirection`),
/// `page` and `limit`.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let query = match query_params(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let params = match query.into_view_parameters(&PRODUCT_SCHEMA) {
        Ok(params) => params,
        Err(e) => return bad_request(e.to_string()),
    };

    let result = state.catalog.list_products(&params);
    debug!(
        page = params.page,
        limit = params.page_size,
        matching = result.total_matching,
        "listed products"
    );

    let pagination = PaginationMeta {
        page: params.page,
        limit: params.page_size,
        total: result.total_matching,
        total_pages: result.total_pages,
        window: compute_window(params.page, result.total_pages),
    };

    let response = ApiResponse::paginated(result.items, pagination, params.has_active_filters());
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/products/:id - Get a single product
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get(&id) {
        Some(product) => (StatusCode::OK, Json(ApiResponse::new(product.clone()))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Product '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
