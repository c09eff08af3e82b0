use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub document_id: String,
    pub email: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn validate_required(value: &str, field: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{} required", field)));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    phone: &str,
    address: &str,
    document_id: &str,
    email: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_required(name, "name")?;
    validate_required(phone, "phone")?;
    validate_required(address, "address")?;
    validate_required(document_id, "document_id")?;
    if let Some(e) = email {
        validate_email(e)?;
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        phone: Set(phone.to_string()),
        address: Set(address.to_string()),
        document_id: Set(document_id.to_string()),
        email: Set(email.map(|e| e.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    phone: Option<&str>,
    address: Option<&str>,
    document_id: Option<&str>,
    email: Option<Option<&str>>,
) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("client not found".into()))?
        .into();
    if let Some(v) = name {
        validate_required(v, "name")?;
        am.name = Set(v.to_string());
    }
    if let Some(v) = phone {
        validate_required(v, "phone")?;
        am.phone = Set(v.to_string());
    }
    if let Some(v) = address {
        validate_required(v, "address")?;
        am.address = Set(v.to_string());
    }
    if let Some(v) = document_id {
        validate_required(v, "document_id")?;
        am.document_id = Set(v.to_string());
    }
    if let Some(v) = email {
        if let Some(e) = v {
            validate_email(e)?;
        }
        am.email = Set(v.map(|e| e.to_string()));
    }
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
