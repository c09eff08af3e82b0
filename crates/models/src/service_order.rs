use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{client, errors};

/// Urgency levels accepted on intake, lowest to highest.
pub const URGENCIES: [&str; 4] = ["baja", "normal", "alta", "urgente"];

/// Workshop workflow states as shown in the back office.
pub const STATUSES: [&str; 4] = ["Recibido", "En proceso", "Completado", "Cancelado"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub equipment: String,
    pub problem: String,
    pub urgency: String,
    /// JSON array of `OrderItem`.
    pub items: Json,
    pub total: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// One selected workshop service on an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub category: String,
    pub subcategory: String,
    pub option: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Client }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_urgency(u: &str) -> Result<String, errors::ModelError> {
    let low = u.to_ascii_lowercase();
    if !URGENCIES.contains(&low.as_str()) {
        return Err(errors::ModelError::Validation(format!("invalid urgency: {}", u)));
    }
    Ok(low)
}

pub fn validate_status(s: &str) -> Result<(), errors::ModelError> {
    if !STATUSES.contains(&s) {
        return Err(errors::ModelError::Validation(format!("invalid status: {}", s)));
    }
    Ok(())
}

fn items_to_json(items: &[OrderItem]) -> Result<Json, errors::ModelError> {
    serde_json::to_value(items).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

pub fn items_from_json(items: &Json) -> Result<Vec<OrderItem>, errors::ModelError> {
    serde_json::from_value(items.clone())
        .map_err(|e| errors::ModelError::Validation(format!("malformed items: {}", e)))
}

pub async fn create(
    db: &DatabaseConnection,
    client_id: Uuid,
    equipment: &str,
    problem: &str,
    urgency: &str,
    items: &[OrderItem],
    total: f64,
) -> Result<Model, errors::ModelError> {
    if equipment.trim().is_empty() {
        return Err(errors::ModelError::Validation("equipment required".into()));
    }
    let urgency = validate_urgency(urgency)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        client_id: Set(client_id),
        equipment: Set(equipment.to_string()),
        problem: Set(problem.to_string()),
        urgency: Set(urgency),
        items: Set(items_to_json(items)?),
        total: Set(total),
        // New orders always enter the workflow at reception
        status: Set("Recibido".into()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    equipment: Option<&str>,
    problem: Option<&str>,
    urgency: Option<&str>,
    items: Option<&[OrderItem]>,
    total: Option<f64>,
) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("service order not found".into()))?
        .into();
    if let Some(v) = equipment {
        if v.trim().is_empty() {
            return Err(errors::ModelError::Validation("equipment required".into()));
        }
        am.equipment = Set(v.to_string());
    }
    if let Some(v) = problem {
        am.problem = Set(v.to_string());
    }
    if let Some(v) = urgency {
        am.urgency = Set(validate_urgency(v)?);
    }
    if let Some(v) = items {
        am.items = Set(items_to_json(v)?);
    }
    if let Some(v) = total {
        am.total = Set(v);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn set_status(db: &DatabaseConnection, id: Uuid, status: &str) -> Result<Model, errors::ModelError> {
    validate_status(status)?;
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("service order not found".into()))?
        .into();
    am.status = Set(status.to_string());
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
