use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::catalog::CatalogProduct;
use service::errors::ServiceError;
use service::products::{ProductInput, ProductPatch, ProductService, SeaOrmProductRepository};
use service::sku::{AttributeAxis, Variant};

use crate::auth::ServerState;
use crate::errors::ApiError;

fn svc(state: &ServerState) -> ProductService<SeaOrmProductRepository> {
    ProductService::new(Arc::new(SeaOrmProductRepository { db: state.db.clone() }))
}

#[utoipa::path(get, path = "/api/admin/products", tag = "admin", responses((status = 200, description = "All products")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::product::Model>>, ApiError> {
    Ok(Json(svc(&state).list().await?))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CatalogProduct>, ApiError> {
    let product = svc(&state)
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("product"))?;
    Ok(Json(product))
}

#[utoipa::path(post, path = "/api/admin/products", tag = "admin", responses((status = 200, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<models::product::Model>, ApiError> {
    Ok(Json(svc(&state).create(&input).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<models::product::Model>, ApiError> {
    Ok(Json(svc(&state).update(id, &patch).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if svc(&state).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddImageInput {
    pub url: String,
    #[serde(default)]
    pub position: i32,
}

pub async fn list_images(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<models::product_image::Model>>, ApiError> {
    Ok(Json(svc(&state).images(id).await?))
}

pub async fn add_image(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AddImageInput>,
) -> Result<Json<models::product_image::Model>, ApiError> {
    Ok(Json(svc(&state).add_image(id, &input.url, input.position).await?))
}

pub async fn delete_image(
    State(state): State<ServerState>,
    Path((product_id, image_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    if svc(&state).delete_image(product_id, image_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Body for variant generation and preview.
#[derive(Debug, Deserialize)]
pub struct ConfigGenInput {
    pub sku_prefix: String,
    pub axes: Vec<AttributeAxis>,
    #[serde(default)]
    pub price: Option<String>,
}

pub async fn list_configs(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<models::product_config::Model>>, ApiError> {
    Ok(Json(svc(&state).configs(id).await?))
}

pub async fn preview_configs(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ConfigGenInput>,
) -> Result<Json<Vec<Variant>>, ApiError> {
    Ok(Json(svc(&state).preview_configs(id, &input.sku_prefix, &input.axes).await?))
}

pub async fn generate_configs(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ConfigGenInput>,
) -> Result<Json<Vec<models::product_config::Model>>, ApiError> {
    let price = input.price.as_deref().unwrap_or("$0");
    Ok(Json(svc(&state).generate_configs(id, &input.sku_prefix, &input.axes, price).await?))
}

pub async fn delete_config(
    State(state): State<ServerState>,
    Path((product_id, config_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    if svc(&state).delete_config(product_id, config_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
