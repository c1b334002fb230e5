//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{analytics, categories, products};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the front end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/products", get(products::list_products))
        .route("/api/products/:id", get(products::get_product))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/assets/analytics", get(analytics::get_analytics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::ServerConfig;
    use crate::types::Product;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        let products = (0..25)
            .map(|i| {
                let department = if i % 2 == 0 { "IT" } else { "Finance" };
                Product::new(format!("p{}", i), format!("Laptop {:02}", i), "Laptop")
                    .with_department(department)
                    .with_stock(i as f64, 100.0)
            })
            .chain(std::iter::once(
                Product::new("m1", "Monitor", "Monitor").with_stock(30.0, 200.0),
            ))
            .collect();
        let state = Arc::new(AppState::new(Catalog::new(products), ServerConfig::default()));
        create_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_list_products_paginated() {
        let (status, body) = get_json(test_app(), "/api/products?page=3&limit=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 6);
        assert_eq!(body["pagination"]["total"], 26);
        assert_eq!(body["pagination"]["totalPages"], 3);
        assert_eq!(body["pagination"]["window"], serde_json::json!([1, 2, 3]));
        assert_eq!(body["hasActiveFilters"], false);
    }

    #[tokio::test]
    async fn test_list_products_filtered_and_sorted() {
        let (status, body) = get_json(
            test_app(),
            "/api/products?search=lap&department=IT&sortBy=quantity&sortOrder=desc&limit=5",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 13);
        assert_eq!(body["data"][0]["name"], "Laptop 24");
        assert_eq!(body["data"][0]["department"], "IT");
        assert_eq!(body["hasActiveFilters"], true);
    }

    #[tokio::test]
    async fn test_list_products_rejects_unknown_sort() {
        let (status, body) = get_json(test_app(), "/api/products?sortField=secret").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_bad_request() {
        for uri in [
            "/api/products?page=abc",
            "/api/products?limit=-1",
            "/api/categories?threshold=x",
            "/api/assets/analytics?threshold=x",
        ] {
            let (status, body) = get_json(test_app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["code"], "BAD_REQUEST", "{}", uri);
            assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_accented_names_sort_with_base_letter() {
        let products = ["Zebra", "Fan", "Éclair", "Apple"]
            .iter()
            .enumerate()
            .map(|(i, name)| Product::new(i.to_string(), *name, *name))
            .collect();
        let state = Arc::new(AppState::new(Catalog::new(products), ServerConfig::default()));

        let (_, body) = get_json(create_router(state.clone()), "/api/products?sortField=name").await;
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Apple", "Éclair", "Fan", "Zebra"]);

        let (_, body) = get_json(create_router(state), "/api/categories?sortBy=key").await;
        assert_eq!(body["data"][1]["key"], "Éclair");
    }

    #[tokio::test]
    async fn test_get_product() {
        let (status, body) = get_json(test_app(), "/api/products/m1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Monitor");

        let (status, body) = get_json(test_app(), "/api/products/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_categories() {
        let (status, body) =
            get_json(test_app(), "/api/categories?sortBy=count&sortOrder=desc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["data"][0]["key"], "Laptop");
        assert_eq!(body["data"][0]["count"], 25);
        assert_eq!(body["data"][0]["belowThresholdCount"], 20);
        assert_eq!(body["data"][1]["totalValue"], 6000.0);
    }

    #[tokio::test]
    async fn test_categories_search_and_bad_sort() {
        let (_, body) = get_json(test_app(), "/api/categories?search=MONI").await;
        assert_eq!(body["total"], 1);

        let (status, _) = get_json(test_app(), "/api/categories?sortBy=price").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analytics() {
        let (status, body) = get_json(test_app(), "/api/assets/analytics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalProducts"], 26);
        assert_eq!(body["data"]["lowStockCount"], 20);
        assert_eq!(body["data"]["byDepartment"].as_array().unwrap().len(), 3);

        let (_, body) = get_json(test_app(), "/api/assets/analytics?threshold=5").await;
        assert_eq!(body["data"]["lowStockCount"], 5);
    }
}
