//! 商品集合处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::service::ShopStore;
use crate::app::product::{Product, ProductPayload};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub store: ShopStore,
}

/// `GET /shop`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.store.list()?;
    Ok(Json(products))
}

/// `POST /shop`
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.store.create(payload)?;
    info!("创建商品: id={}, name={}", product.id, product.name);
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /shop/:id`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, CoreError> {
    let product = state.store.update(id, payload)?;
    info!("更新商品: id={}", product.id);
    Ok(Json(product))
}
