use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use uuid::Uuid;

use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::errors::AuthError;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService, Claims};

use crate::errors::JsonError;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

impl ServerState {
    fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository { db: self.db.clone() });
        AuthService::new(
            repo,
            AuthConfig {
                jwt_secret: Some(self.auth.jwt_secret.clone()),
                password_algorithm: "argon2".into(),
            },
        )
    }
}

#[derive(Serialize)]
pub struct RegisterOutput {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct MeOutput {
    pub user_id: String,
    pub email: String,
}

fn auth_error(e: AuthError) -> JsonError {
    let (status, kind) = match e {
        AuthError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
        AuthError::Conflict => (StatusCode::CONFLICT, "conflict"),
        AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };
    JsonError::new(status, kind, e.to_string())
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "Registered"), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<RegisterOutput>, JsonError> {
    if let Err(e) = models::admin_user::validate_email(&input.email) {
        return Err(JsonError::new(StatusCode::BAD_REQUEST, "validation", e.to_string()));
    }
    if let Err(e) = models::admin_user::validate_name(&input.name) {
        return Err(JsonError::new(StatusCode::BAD_REQUEST, "validation", e.to_string()));
    }
    let svc = state.auth_service();
    let user = svc.register(input).await.map_err(auth_error)?;
    Ok(Json(RegisterOutput { user_id: user.id }))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In"), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), JsonError> {
    let svc = state.auth_service();
    let session = svc.login(input).await.map_err(auth_error)?;
    let user = session.user;
    if let Some(token) = session.token {
        let mut cookie = Cookie::new("auth_token", token.clone());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(false);
        cookie.set_same_site(SameSite::Lax);
        let jar = jar.add(cookie);
        let out = LoginOutput { user_id: user.id, email: user.email, name: user.name, token };
        return Ok((jar, Json(out)));
    }
    Err(JsonError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", "token generation failed"))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::from("auth_token"));
    (jar, StatusCode::NO_CONTENT)
}

pub async fn me(
    State(state): State<ServerState>,
    jar: CookieJar,
) -> Result<Json<MeOutput>, JsonError> {
    let token = jar
        .get("auth_token")
        .map(|c| c.value().to_string())
        .ok_or_else(|| JsonError::unauthorized("no auth"))?;
    let claims = decode_claims(&token, &state.auth.jwt_secret)
        .map_err(|_| JsonError::unauthorized("invalid token"))?;
    Ok(Json(MeOutput { user_id: claims.uid, email: claims.sub }))
}

fn decode_claims(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(token, &key, &validation).map(|data| data.claims)
}

/// Route-layer guard for the back office. Accepts a Bearer token in the
/// Authorization header, falling back to the auth_token cookie.
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = req.uri().path().to_string();

    let token = {
        let authz = req
            .headers()
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if let Some(h) = authz {
            let prefix = "Bearer ";
            if !h.starts_with(prefix) {
                tracing::warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(StatusCode::UNAUTHORIZED);
            }
            h[prefix.len()..].to_string()
        } else {
            let cookie_header = req
                .headers()
                .get(axum::http::header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");

            let mut token_val: Option<String> = None;
            for part in cookie_header.split(';') {
                let kv = part.trim();
                if let Some(rest) = kv.strip_prefix("auth_token=") {
                    token_val = Some(rest.to_string());
                    break;
                }
            }

            match token_val {
                Some(t) if !t.is_empty() => t,
                _ => {
                    tracing::warn!(path = %path, "missing Authorization header and auth_token cookie");
                    return Err(StatusCode::UNAUTHORIZED);
                }
            }
        }
    };

    match decode_claims(&token, &state.auth.jwt_secret) {
        Ok(_claims) => Ok(next.run(req).await),
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
