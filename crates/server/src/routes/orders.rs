use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::errors::ServiceError;
use service::orders::{OrderInput, OrderPatch, OrderService, OrderView, SeaOrmOrderRepository};

use crate::auth::ServerState;
use crate::errors::ApiError;
use crate::routes::clients::PageQuery;

fn svc(state: &ServerState) -> OrderService<SeaOrmOrderRepository> {
    OrderService::new(Arc::new(SeaOrmOrderRepository { db: state.db.clone() }))
}

#[utoipa::path(get, path = "/api/admin/service-orders", tag = "admin", responses((status = 200, description = "All service orders")))]
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    let svc = svc(&state);
    let items = match query.pagination() {
        Some(page) => svc.list_page(page).await?,
        None => svc.list().await?,
    };
    Ok(Json(items))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderView>, ApiError> {
    let order = svc(&state)
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("service order"))?;
    Ok(Json(order))
}

#[utoipa::path(post, path = "/api/admin/service-orders", tag = "admin", responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"), (status = 404, description = "Unknown client")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<OrderInput>,
) -> Result<Json<OrderView>, ApiError> {
    Ok(Json(svc(&state).create(&input).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<OrderView>, ApiError> {
    Ok(Json(svc(&state).update(id, &patch).await?))
}

#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub status: String,
}

pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<StatusInput>,
) -> Result<Json<OrderView>, ApiError> {
    Ok(Json(svc(&state).set_status(id, &input.status).await?))
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
