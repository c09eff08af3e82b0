use axum::{extract::State, Json};

use service::stats::{DashboardStats, StatsService};

use crate::auth::ServerState;
use crate::errors::ApiError;

#[utoipa::path(get, path = "/api/admin/stats", tag = "admin", responses((status = 200, description = "Dashboard counters")))]
pub async fn dashboard(State(state): State<ServerState>) -> Result<Json<DashboardStats>, ApiError> {
    let stats = StatsService::new(state.db.clone()).dashboard().await?;
    Ok(Json(stats))
}
