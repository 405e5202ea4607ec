//! 路由组装

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use std::{path::Path, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::product::{
    handler::{create_product, delete_product, health_check, list_products, AppState},
    service::ProductService,
};
use crate::{core::middleware::request_logging_middleware, infrastructure::config::HttpConfig};

pub fn create_router(product_service: ProductService, http: &HttpConfig) -> Router {
    let state = AppState { product_service };

    let mut app = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/:id", delete(delete_product))
        .route("/health", get(health_check));

    if let Some(dir) = &http.static_dir {
        if Path::new(dir).is_dir() {
            info!("Serving static files from {}", dir.display());
            app = app.fallback_service(ServeDir::new(dir));
        } else {
            warn!("Static directory {} not found, skipping", dir.display());
        }
    }

    app.layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
