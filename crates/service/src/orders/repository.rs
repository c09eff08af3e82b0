use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use models::service_order::OrderItem;

use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::service_order::Model>, ServiceError>;
    async fn list_page(&self, page: Pagination) -> Result<Vec<models::service_order::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<models::service_order::Model>, ServiceError>;
    async fn client_exists(&self, client_id: Uuid) -> Result<bool, ServiceError>;
    async fn create(
        &self,
        client_id: Uuid,
        equipment: &str,
        problem: &str,
        urgency: &str,
        items: &[OrderItem],
        total: f64,
    ) -> Result<models::service_order::Model, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        equipment: Option<&str>,
        problem: Option<&str>,
        urgency: Option<&str>,
        items: Option<&[OrderItem]>,
        total: Option<f64>,
    ) -> Result<models::service_order::Model, ServiceError>;
    async fn set_status(&self, id: Uuid, status: &str) -> Result<models::service_order::Model, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn list(&self) -> Result<Vec<models::service_order::Model>, ServiceError> {
        models::service_order::Entity::find()
            .order_by_desc(models::service_order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn list_page(&self, page: Pagination) -> Result<Vec<models::service_order::Model>, ServiceError> {
        let (index, per_page) = page.normalize();
        models::service_order::Entity::find()
            .order_by_desc(models::service_order::Column::CreatedAt)
            .paginate(&self.db, per_page)
            .fetch_page(index)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get(&self, id: Uuid) -> Result<Option<models::service_order::Model>, ServiceError> {
        models::service_order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn client_exists(&self, client_id: Uuid) -> Result<bool, ServiceError> {
        let found = models::client::Entity::find_by_id(client_id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn create(
        &self,
        client_id: Uuid,
        equipment: &str,
        problem: &str,
        urgency: &str,
        items: &[OrderItem],
        total: f64,
    ) -> Result<models::service_order::Model, ServiceError> {
        models::service_order::create(&self.db, client_id, equipment, problem, urgency, items, total)
            .await
            .map_err(ServiceError::from)
    }

    async fn update(
        &self,
        id: Uuid,
        equipment: Option<&str>,
        problem: Option<&str>,
        urgency: Option<&str>,
        items: Option<&[OrderItem]>,
        total: Option<f64>,
    ) -> Result<models::service_order::Model, ServiceError> {
        models::service_order::update(&self.db, id, equipment, problem, urgency, items, total)
            .await
            .map_err(ServiceError::from)
    }

    async fn set_status(&self, id: Uuid, status: &str) -> Result<models::service_order::Model, ServiceError> {
        models::service_order::set_status(&self.db, id, status)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        if self.get(id).await?.is_none() {
            return Ok(false);
        }
        models::service_order::hard_delete(&self.db, id).await.map_err(ServiceError::from)?;
        Ok(true)
    }
}
