use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use crate::clients::service::{ClientInput, ClientPatch};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::client::Model>, ServiceError>;
    async fn list_page(&self, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<models::client::Model>, ServiceError>;
    async fn create(&self, input: &ClientInput) -> Result<models::client::Model, ServiceError>;
    async fn update(&self, id: Uuid, patch: &ClientPatch) -> Result<models::client::Model, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn list(&self) -> Result<Vec<models::client::Model>, ServiceError> {
        models::client::Entity::find()
            .order_by_asc(models::client::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn list_page(&self, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError> {
        let (index, per_page) = page.normalize();
        models::client::Entity::find()
            .order_by_asc(models::client::Column::Name)
            .paginate(&self.db, per_page)
            .fetch_page(index)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get(&self, id: Uuid) -> Result<Option<models::client::Model>, ServiceError> {
        models::client::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, input: &ClientInput) -> Result<models::client::Model, ServiceError> {
        models::client::create(
            &self.db,
            &input.name,
            &input.phone,
            &input.address,
            &input.document_id,
            input.email.as_deref(),
        )
        .await
        .map_err(ServiceError::from)
    }

    async fn update(&self, id: Uuid, patch: &ClientPatch) -> Result<models::client::Model, ServiceError> {
        models::client::update(
            &self.db,
            id,
            patch.name.as_deref(),
            patch.phone.as_deref(),
            patch.address.as_deref(),
            patch.document_id.as_deref(),
            patch.email.as_ref().map(|o| o.as_deref()),
        )
        .await
        .map_err(ServiceError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        if self.get(id).await?.is_none() {
            return Ok(false);
        }
        models::client::hard_delete(&self.db, id).await.map_err(ServiceError::from)?;
        Ok(true)
    }
}
