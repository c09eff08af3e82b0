use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_setting")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: Json,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn get(db: &DatabaseConnection, key: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(key)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn upsert(db: &DatabaseConnection, key: &str, value: Json) -> Result<Model, errors::ModelError> {
    if key.trim().is_empty() {
        return Err(errors::ModelError::Validation("key required".into()));
    }
    let now = Utc::now().into();
    let existing = Entity::find_by_id(key)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    match existing {
        Some(m) => {
            let mut am: ActiveModel = m.into();
            am.value = Set(value);
            am.updated_at = Set(now);
            am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
        }
        None => {
            let am = ActiveModel {
                key: Set(key.to_string()),
                value: Set(value),
                updated_at: Set(now),
            };
            am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
        }
    }
}
