use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use jsonwebtoken::{encode, EncodingKey, Header as JwtHeader};
use rand::rngs::OsRng;
use tracing::{info, instrument};

use super::domain::{AuthSession, AuthUser, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub password_algorithm: String,
}

/// JWT claims carried in the admin session token.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: String,
    pub exp: usize,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Register a new back-office user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: None, password_algorithm: "argon2".into() });
    /// let input = RegisterInput { email: "admin@example.com".into(), name: "Admin".into(), password: "Secret123".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "admin@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        if input.password.len() < 8 {
            return Err(AuthError::Validation("password too short (>=8)".into()));
        }
        if self.repo.find_user_by_email(&input.email).await?.is_some() {
            return Err(AuthError::Conflict);
        }

        let user = self.repo.create_user(&input.email, &input.name).await?;
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let _cred = self
            .repo
            .upsert_password(user.id, hash, self.cfg.password_algorithm.clone())
            .await?;
        info!(user_id = %user.id, email = %user.email, "admin_registered");
        Ok(user)
    }

    /// Authenticate a user and optionally issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: Some("secret".into()), password_algorithm: "argon2".into() });
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { email: "a@e.com".into(), name: "A".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "a@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "a@e.com");
    /// assert!(session.token.is_some());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self
            .repo
            .find_user_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let cred = self
            .repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let mut token = None;
        if let Some(secret) = &self.cfg.jwt_secret {
            let exp = (chrono::Utc::now() + chrono::Duration::hours(12)).timestamp() as usize;
            let claims = Claims { sub: user.email.clone(), uid: user.id.to_string(), exp };
            token = Some(
                encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
                    .map_err(|e| AuthError::TokenError(e.to_string()))?,
            );
        }

        Ok(AuthSession { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc(secret: Option<&str>) -> AuthService<MockAuthRepository> {
        AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: secret.map(String::from), password_algorithm: "argon2".into() },
        )
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let svc = svc(None);
        let err = svc
            .register(RegisterInput { email: "a@e.com".into(), name: "A".into(), password: "short".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let svc = svc(None);
        let input = RegisterInput { email: "a@e.com".into(), name: "A".into(), password: "Passw0rd".into() };
        svc.register(input.clone()).await.unwrap();
        assert!(matches!(svc.register(input).await.unwrap_err(), AuthError::Conflict));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let svc = svc(Some("s"));
        svc.register(RegisterInput { email: "a@e.com".into(), name: "A".into(), password: "Passw0rd".into() })
            .await
            .unwrap();
        let err = svc
            .login(LoginInput { email: "a@e.com".into(), password: "nope-nope".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn login_without_secret_yields_no_token() {
        let svc = svc(None);
        svc.register(RegisterInput { email: "a@e.com".into(), name: "A".into(), password: "Passw0rd".into() })
            .await
            .unwrap();
        let session = svc
            .login(LoginInput { email: "a@e.com".into(), password: "Passw0rd".into() })
            .await
            .unwrap();
        assert!(session.token.is_none());
    }
}
