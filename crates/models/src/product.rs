use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    /// Free text; storefront facets are extracted from it per request.
    pub description: String,
    /// Display string as shown on the storefront, e.g. "$1,299".
    pub price: String,
    pub image: String,
    pub category: String,
    pub is_offer: bool,
    pub in_stock: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Images, Configs }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Images => Entity::has_many(crate::product_image::Entity).into(),
            Relation::Configs => Entity::has_many(crate::product_config::Entity).into(),
        }
    }
}

impl Related<crate::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation("title required".into()));
    }
    Ok(())
}

pub fn validate_price(price: &str) -> Result<(), errors::ModelError> {
    if price.trim().is_empty() {
        return Err(errors::ModelError::Validation("price required".into()));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), errors::ModelError> {
    if category.trim().is_empty() {
        return Err(errors::ModelError::Validation("category required".into()));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
    price: &str,
    image: &str,
    category: &str,
    is_offer: bool,
    in_stock: bool,
) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    validate_price(price)?;
    validate_category(category)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        price: Set(price.to_string()),
        image: Set(image.to_string()),
        category: Set(category.to_string()),
        is_offer: Set(is_offer),
        in_stock: Set(in_stock),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    title: Option<&str>,
    description: Option<&str>,
    price: Option<&str>,
    image: Option<&str>,
    category: Option<&str>,
    is_offer: Option<bool>,
    in_stock: Option<bool>,
) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("product not found".into()))?
        .into();
    if let Some(v) = title {
        validate_title(v)?;
        am.title = Set(v.to_string());
    }
    if let Some(v) = description {
        am.description = Set(v.to_string());
    }
    if let Some(v) = price {
        validate_price(v)?;
        am.price = Set(v.to_string());
    }
    if let Some(v) = image {
        am.image = Set(v.to_string());
    }
    if let Some(v) = category {
        validate_category(v)?;
        am.category = Set(v.to_string());
    }
    if let Some(v) = is_offer {
        am.is_offer = Set(v);
    }
    if let Some(v) = in_stock {
        am.in_stock = Set(v);
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
