use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::admin_user::Entity::find()
            .filter(models::admin_user::Column::Email.eq(email.to_string()))
            .filter(models::admin_user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| AuthUser { id: u.id, email: u.email, name: u.name }))
    }

    async fn create_user(&self, email: &str, name: &str) -> Result<AuthUser, AuthError> {
        let created = models::admin_user::create(&self.db, email, name)
            .await
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        Ok(AuthUser { id: created.id, email: created.email, name: created.name })
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let res = models::admin_credentials::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|c| Credentials { user_id: c.user_id, password_hash: c.password_hash, algorithm: c.algorithm }))
    }

    async fn upsert_password(&self, user_id: Uuid, password_hash: String, algorithm: String) -> Result<Credentials, AuthError> {
        let c = models::admin_credentials::upsert_password(&self.db, user_id, password_hash, &algorithm)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(Credentials { user_id: c.user_id, password_hash: c.password_hash, algorithm: c.algorithm })
    }
}
