use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::products::service::{ProductInput, ProductPatch};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self, category: Option<&str>) -> Result<Vec<models::product::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<models::product::Model>, ServiceError>;
    async fn create(&self, input: &ProductInput) -> Result<models::product::Model, ServiceError>;
    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<models::product::Model, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;

    async fn list_images(&self, product_id: Uuid) -> Result<Vec<models::product_image::Model>, ServiceError>;
    async fn add_image(&self, product_id: Uuid, url: &str, position: i32) -> Result<models::product_image::Model, ServiceError>;
    async fn delete_image(&self, image_id: Uuid) -> Result<bool, ServiceError>;

    async fn list_configs(&self, product_id: Uuid) -> Result<Vec<models::product_config::Model>, ServiceError>;
    async fn add_config(
        &self,
        product_id: Uuid,
        sku: &str,
        label: &str,
        attributes: serde_json::Value,
        price: &str,
    ) -> Result<models::product_config::Model, ServiceError>;
    async fn delete_config(&self, config_id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self, category: Option<&str>) -> Result<Vec<models::product::Model>, ServiceError> {
        let mut query = models::product::Entity::find()
            .order_by_asc(models::product::Column::Title);
        if let Some(c) = category {
            query = query.filter(models::product::Column::Category.eq(c));
        }
        query.all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get(&self, id: Uuid) -> Result<Option<models::product::Model>, ServiceError> {
        models::product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, input: &ProductInput) -> Result<models::product::Model, ServiceError> {
        models::product::create(
            &self.db,
            &input.title,
            &input.description,
            &input.price,
            &input.image,
            &input.category,
            input.is_offer,
            input.in_stock,
        )
        .await
        .map_err(ServiceError::from)
    }

    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<models::product::Model, ServiceError> {
        models::product::update(
            &self.db,
            id,
            patch.title.as_deref(),
            patch.description.as_deref(),
            patch.price.as_deref(),
            patch.image.as_deref(),
            patch.category.as_deref(),
            patch.is_offer,
            patch.in_stock,
        )
        .await
        .map_err(ServiceError::from)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let existing = self.get(id).await?;
        if existing.is_none() {
            return Ok(false);
        }
        models::product::hard_delete(&self.db, id).await.map_err(ServiceError::from)?;
        Ok(true)
    }

    async fn list_images(&self, product_id: Uuid) -> Result<Vec<models::product_image::Model>, ServiceError> {
        models::product_image::list_for_product(&self.db, product_id)
            .await
            .map_err(ServiceError::from)
    }

    async fn add_image(&self, product_id: Uuid, url: &str, position: i32) -> Result<models::product_image::Model, ServiceError> {
        models::product_image::add(&self.db, product_id, url, position)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_image(&self, image_id: Uuid) -> Result<bool, ServiceError> {
        models::product_image::hard_delete(&self.db, image_id).await.map_err(ServiceError::from)
    }

    async fn list_configs(&self, product_id: Uuid) -> Result<Vec<models::product_config::Model>, ServiceError> {
        models::product_config::list_for_product(&self.db, product_id)
            .await
            .map_err(ServiceError::from)
    }

    async fn add_config(
        &self,
        product_id: Uuid,
        sku: &str,
        label: &str,
        attributes: serde_json::Value,
        price: &str,
    ) -> Result<models::product_config::Model, ServiceError> {
        models::product_config::create(&self.db, product_id, sku, label, attributes, price)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_config(&self, config_id: Uuid) -> Result<bool, ServiceError> {
        models::product_config::hard_delete(&self.db, config_id).await.map_err(ServiceError::from)
    }
}
