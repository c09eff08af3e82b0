use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth::{self, ServerState};
use crate::openapi::ApiDoc;

pub mod catalog;
pub mod clients;
pub mod orders;
pub mod products;
pub mod settings;
pub mod stats;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static frontend, public catalog,
/// auth, and the guarded back office.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    let public = Router::new()
        .nest_service("/", static_dir)
        .route("/health", get(health))
        .route("/api/products", get(catalog::list_products))
        .route("/api/products/facets", get(catalog::facets))
        .route("/api/products/:id", get(catalog::get_product))
        .route("/api/services", get(catalog::workshop_services));

    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me));

    let admin = Router::new()
        .route("/api/admin/products", get(products::list).post(products::create))
        .route(
            "/api/admin/products/:id",
            get(products::get_one).put(products::update).delete(products::delete),
        )
        .route(
            "/api/admin/products/:id/images",
            get(products::list_images).post(products::add_image),
        )
        .route(
            "/api/admin/products/:id/images/:image_id",
            axum::routing::delete(products::delete_image),
        )
        .route(
            "/api/admin/products/:id/configs",
            get(products::list_configs).post(products::generate_configs),
        )
        .route("/api/admin/products/:id/configs/preview", post(products::preview_configs))
        .route(
            "/api/admin/products/:id/configs/:config_id",
            axum::routing::delete(products::delete_config),
        )
        .route("/api/admin/clients", get(clients::list).post(clients::create))
        .route(
            "/api/admin/clients/:id",
            get(clients::get_one).put(clients::update).delete(clients::delete),
        )
        .route("/api/admin/service-orders", get(orders::list).post(orders::create))
        .route(
            "/api/admin/service-orders/:id",
            get(orders::get_one).put(orders::update).delete(orders::delete),
        )
        .route("/api/admin/service-orders/:id/status", put(orders::set_status))
        .route("/api/admin/stats", get(stats::dashboard))
        .route("/api/admin/settings", get(settings::list))
        .route("/api/admin/settings/:key", get(settings::get_one).put(settings::put))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_admin));

    public
        .merge(auth_routes)
        .merge(admin)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
