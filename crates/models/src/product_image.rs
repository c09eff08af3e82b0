use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors, product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn add(
    db: &DatabaseConnection,
    product_id: Uuid,
    url: &str,
    position: i32,
) -> Result<Model, errors::ModelError> {
    if url.trim().is_empty() {
        return Err(errors::ModelError::Validation("url required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        url: Set(url.to_string()),
        position: Set(position),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list_for_product(
    db: &DatabaseConnection,
    product_id: Uuid,
) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_asc(Column::Position)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
