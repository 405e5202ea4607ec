//! 产品处理器

use axum::{extract::State, response::Json};

use super::{
    model::{CreateProduct, Product},
    service::ProductService,
};
use crate::core::{
    error::ApiError,
    extract::{ApiJson, ApiPath},
    response::{ApiResponse, DeleteResponse},
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(ApiResponse::success(products)))
}

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProduct>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state.product_service.create_product(payload).await?;
    Ok(Json(ApiResponse::success(product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let changes = state.product_service.delete_product(id).await?;
    Ok(Json(DeleteResponse::deleted(changes)))
}

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.product_service.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
