use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use service::errors::ServiceError;
use service::settings::SettingsService;

use crate::auth::ServerState;
use crate::errors::ApiError;

fn svc(state: &ServerState) -> SettingsService {
    SettingsService::new(state.db.clone())
}

#[utoipa::path(get, path = "/api/admin/settings", tag = "admin", responses((status = 200, description = "All settings")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::site_setting::Model>>, ApiError> {
    Ok(Json(svc(&state).list().await?))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> Result<Json<models::site_setting::Model>, ApiError> {
    let setting = svc(&state)
        .get(&key)
        .await?
        .ok_or_else(|| ServiceError::not_found("setting"))?;
    Ok(Json(setting))
}

#[utoipa::path(put, path = "/api/admin/settings/{key}", tag = "admin", responses((status = 200, description = "Saved"), (status = 400, description = "Bad Request")))]
pub async fn put(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<models::site_setting::Model>, ApiError> {
    Ok(Json(svc(&state).put(&key, value).await?))
}
