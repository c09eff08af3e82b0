use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{admin_user, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_credentials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub password_hash: String,
    pub algorithm: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(admin_user::Entity)
                .from(Column::UserId)
                .to(admin_user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert or replace the password hash for a user.
pub async fn upsert_password(
    db: &DatabaseConnection,
    user_id: Uuid,
    password_hash: String,
    algorithm: &str,
) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let existing = Entity::find_by_id(user_id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    match existing {
        Some(m) => {
            let mut am: ActiveModel = m.into();
            am.password_hash = Set(password_hash);
            am.algorithm = Set(algorithm.to_string());
            am.updated_at = Set(now);
            am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
        }
        None => {
            let am = ActiveModel {
                user_id: Set(user_id),
                password_hash: Set(password_hash),
                algorithm: Set(algorithm.to_string()),
                updated_at: Set(now),
            };
            am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
        }
    }
}
