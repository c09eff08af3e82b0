use std::{env, net::SocketAddr};

use axum::Router;
use common::env::ensure_env;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::auth::{ServerAuthConfig, ServerState};
use crate::errors::StartupError;
use crate::routes;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr() -> Result<SocketAddr, StartupError> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {}", e)))
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    ensure_env("frontend").await?;

    let db = models::db::connect().await?;

    let jwt_secret =
        env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string());
    let state = ServerState {
        db,
        auth: ServerAuthConfig { jwt_secret },
    };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting http server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
