use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::auth::{ServerAuthConfig, ServerState};
use server::routes;

async fn start_server() -> anyhow::Result<String> {
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip auth flow tests.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let state = ServerState {
        db,
        auth: ServerAuthConfig { jwt_secret: "test-secret".into() },
    };
    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(base_url)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn register_login_me_logout_roundtrip() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let base_url = match start_server().await {
        Ok(u) => u,
        Err(_) => return Ok(()),
    };
    let c = client();

    let email = format!("admin_{}@example.com", Uuid::new_v4());
    let password = "S3curePass!";

    let res = c
        .post(format!("{}/auth/register", base_url))
        .json(&json!({"email": email, "name": "Admin", "password": password}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Duplicate registration conflicts
    let res = c
        .post(format!("{}/auth/register", base_url))
        .json(&json!({"email": email, "name": "Admin", "password": password}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c
        .post(format!("{}/auth/login", base_url))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("set-cookie").is_some());
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["email"], email.as_str());

    // Cookie session resolves the current user
    let res = c.get(format!("{}/auth/me", base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let me = res.json::<serde_json::Value>().await?;
    assert_eq!(me["email"], email.as_str());

    // Cookie also grants back-office access
    let res = c.get(format!("{}/api/admin/stats", base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Logout clears the cookie
    let res = c.post(format!("{}/auth/logout", base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/auth/me", base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_rejects_wrong_password() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let base_url = match start_server().await {
        Ok(u) => u,
        Err(_) => return Ok(()),
    };
    let c = client();

    let email = format!("admin_{}@example.com", Uuid::new_v4());
    let res = c
        .post(format!("{}/auth/register", base_url))
        .json(&json!({"email": email, "name": "Admin", "password": "S3curePass!"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c
        .post(format!("{}/auth/login", base_url))
        .json(&json!({"email": email, "password": "wrong-password"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "unauthorized");
    assert!(body["detail"].is_string());
    Ok(())
}
