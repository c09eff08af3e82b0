use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, email: &str, name: &str) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_name(name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        status: Set("active".into()),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn soft_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("admin user not found".into()))?
        .into();
    found.deleted_at = Set(Some(Utc::now().into()));
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
