use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::service_order::OrderItem;

use crate::errors::ServiceError;
use crate::orders::repository::OrderRepository;
use crate::pagination::Pagination;
use crate::workshop;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInput {
    pub client_id: Uuid,
    pub equipment: String,
    #[serde(default)]
    pub problem: String,
    pub urgency: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Omitted totals are derived from the item prices.
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    pub equipment: Option<String>,
    pub problem: Option<String>,
    pub urgency: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<f64>,
}

/// Service order with its items decoded from the stored JSON column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: Uuid,
    pub client_id: Uuid,
    pub equipment: String,
    pub problem: String,
    pub urgency: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    pub updated_at: chrono::DateTime<chrono::FixedOffset>,
}

impl OrderView {
    fn from_model(m: models::service_order::Model) -> Result<Self, ServiceError> {
        let items = models::service_order::items_from_json(&m.items)?;
        Ok(Self {
            id: m.id,
            client_id: m.client_id,
            equipment: m.equipment,
            problem: m.problem,
            urgency: m.urgency,
            items,
            total: m.total,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

/// Application service for workshop service orders.
pub struct OrderService<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<OrderView>, ServiceError> {
        self.repo
            .list()
            .await?
            .into_iter()
            .map(OrderView::from_model)
            .collect()
    }

    pub async fn list_page(&self, page: Pagination) -> Result<Vec<OrderView>, ServiceError> {
        self.repo
            .list_page(page)
            .await?
            .into_iter()
            .map(OrderView::from_model)
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<OrderView>, ServiceError> {
        match self.repo.get(id).await? {
            Some(m) => Ok(Some(OrderView::from_model(m)?)),
            None => Ok(None),
        }
    }

    /// Intake: the client must already be registered, and new orders
    /// always start in "Recibido".
    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn create(&self, input: &OrderInput) -> Result<OrderView, ServiceError> {
        if !self.repo.client_exists(input.client_id).await? {
            return Err(ServiceError::not_found("client"));
        }
        let total = input.total.unwrap_or_else(|| workshop::order_total(&input.items));
        let created = self
            .repo
            .create(
                input.client_id,
                &input.equipment,
                &input.problem,
                &input.urgency,
                &input.items,
                total,
            )
            .await?;
        info!(order_id = %created.id, total = created.total, "service_order_created");
        OrderView::from_model(created)
    }

    pub async fn update(&self, id: Uuid, patch: &OrderPatch) -> Result<OrderView, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("service order"));
        }
        let updated = self
            .repo
            .update(
                id,
                patch.equipment.as_deref(),
                patch.problem.as_deref(),
                patch.urgency.as_deref(),
                patch.items.as_deref(),
                patch.total,
            )
            .await?;
        OrderView::from_model(updated)
    }

    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn set_status(&self, id: Uuid, status: &str) -> Result<OrderView, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("service order"));
        }
        let updated = self.repo.set_status(id, status).await?;
        info!("service_order_status_changed");
        OrderView::from_model(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.repo.delete(id).await
    }
}
