//! Site-wide settings stored as JSON documents keyed by name, for
//! things like the storefront banner and contact details.

use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::ServiceError;

pub struct SettingsService {
    db: DatabaseConnection,
}

impl SettingsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<models::site_setting::Model>, ServiceError> {
        models::site_setting::get(&self.db, key).await.map_err(ServiceError::from)
    }

    pub async fn list(&self) -> Result<Vec<models::site_setting::Model>, ServiceError> {
        models::site_setting::list(&self.db).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn put(&self, key: &str, value: Value) -> Result<models::site_setting::Model, ServiceError> {
        let saved = models::site_setting::upsert(&self.db, key, value).await?;
        info!("site_setting_saved");
        Ok(saved)
    }
}
