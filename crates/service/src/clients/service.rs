use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::clients::repository::ClientRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub document_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `email: Some(None)` clears the stored address. An absent field in the
/// request body leaves it untouched, an explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Application service for the customer registry.
pub struct ClientService<R: ClientRepository> {
    repo: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<models::client::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn list_page(&self, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError> {
        self.repo.list_page(page).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<models::client::Model>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &ClientInput) -> Result<models::client::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(client_id = %created.id, "client_created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, patch: &ClientPatch) -> Result<models::client::Model, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("client"));
        }
        self.repo.update(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.repo.delete(id).await
    }
}
