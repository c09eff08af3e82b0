//! Aggregated counters for the admin dashboard.

use std::collections::BTreeMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub products_total: u64,
    pub products_in_stock: u64,
    pub offers: u64,
    pub clients_total: u64,
    pub orders_total: u64,
    /// Keyed by workflow status, absent statuses count as zero.
    pub orders_by_status: BTreeMap<String, u64>,
    /// Sum of totals across completed orders.
    pub revenue_completed: f64,
}

pub struct StatsService {
    db: DatabaseConnection,
}

impl StatsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
        let db = |e: sea_orm::DbErr| ServiceError::Db(e.to_string());

        let products_total = models::product::Entity::find().count(&self.db).await.map_err(db)?;
        let products_in_stock = models::product::Entity::find()
            .filter(models::product::Column::InStock.eq(true))
            .count(&self.db)
            .await
            .map_err(db)?;
        let offers = models::product::Entity::find()
            .filter(models::product::Column::IsOffer.eq(true))
            .count(&self.db)
            .await
            .map_err(db)?;
        let clients_total = models::client::Entity::find().count(&self.db).await.map_err(db)?;

        let orders = models::service_order::Entity::find().all(&self.db).await.map_err(db)?;
        let orders_total = orders.len() as u64;
        let mut orders_by_status: BTreeMap<String, u64> = models::service_order::STATUSES
            .iter()
            .map(|s| (s.to_string(), 0))
            .collect();
        let mut revenue_completed = 0.0;
        for order in &orders {
            *orders_by_status.entry(order.status.clone()).or_insert(0) += 1;
            if order.status == "Completado" {
                revenue_completed += order.total;
            }
        }

        Ok(DashboardStats {
            products_total,
            products_in_stock,
            offers,
            clients_total,
            orders_total,
            orders_by_status,
            revenue_completed,
        })
    }
}
