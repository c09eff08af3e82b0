use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::clients::{ClientInput, ClientPatch, ClientService, SeaOrmClientRepository};
use service::errors::ServiceError;
use service::pagination::Pagination;

use crate::auth::ServerState;
use crate::errors::ApiError;

fn svc(state: &ServerState) -> ClientService<SeaOrmClientRepository> {
    ClientService::new(Arc::new(SeaOrmClientRepository { db: state.db.clone() }))
}

/// Optional paging; the full list is returned when no page is given.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn pagination(&self) -> Option<Pagination> {
        self.page.map(|page| Pagination {
            page,
            per_page: self.per_page.unwrap_or(Pagination::default().per_page),
        })
    }
}

#[utoipa::path(get, path = "/api/admin/clients", tag = "admin", responses((status = 200, description = "All clients")))]
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<models::client::Model>>, ApiError> {
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
) -> Result<Json<models::client::Model>, ApiError> {
    let client = svc(&state)
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("client"))?;
    Ok(Json(client))
}

#[utoipa::path(post, path = "/api/admin/clients", tag = "admin", responses((status = 200, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ClientInput>,
) -> Result<Json<models::client::Model>, ApiError> {
    Ok(Json(svc(&state).create(&input).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ClientPatch>,
) -> Result<Json<models::client::Model>, ApiError> {
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
