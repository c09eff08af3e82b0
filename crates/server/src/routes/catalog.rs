use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::catalog::{CatalogFilters, CatalogProduct, FilterValues, SortBy};
use service::errors::ServiceError;
use service::products::{ProductDetail, ProductService, SeaOrmProductRepository};
use service::workshop;

use crate::auth::ServerState;
use crate::errors::ApiError;

fn product_service(state: &ServerState) -> ProductService<SeaOrmProductRepository> {
    ProductService::new(std::sync::Arc::new(SeaOrmProductRepository { db: state.db.clone() }))
}

/// Storefront query string. All filters are optional; "all" and empty
/// values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub ram: Option<String>,
    pub screen: Option<String>,
    pub price: Option<String>,
    pub graphics: Option<String>,
    pub offers: Option<bool>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    fn into_parts(self) -> (CatalogFilters, Option<SortBy>) {
        let sort = self.sort.as_deref().and_then(|s| s.parse().ok());
        let filters = CatalogFilters {
            category: self.category,
            brand: self.brand,
            ram: self.ram,
            screen: self.screen,
            price: self.price,
            graphics: self.graphics,
            offers: self.offers,
            search: self.search,
        };
        (filters, sort)
    }
}

#[utoipa::path(get, path = "/api/products", tag = "catalog", responses((status = 200, description = "Filtered product list")))]
pub async fn list_products(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CatalogProduct>>, ApiError> {
    let (filters, sort) = query.into_parts();
    let items = product_service(&state).storefront(&filters, sort).await?;
    Ok(Json(items))
}

#[utoipa::path(get, path = "/api/products/facets", tag = "catalog", responses((status = 200, description = "Facet values")))]
pub async fn facets(State(state): State<ServerState>) -> Result<Json<FilterValues>, ApiError> {
    let values = product_service(&state).facets().await?;
    Ok(Json(values))
}

#[utoipa::path(get, path = "/api/products/{id}", tag = "catalog", responses((status = 200, description = "Product detail with specs and images"), (status = 404, description = "Not Found")))]
pub async fn get_product(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductDetail>, ApiError> {
    let detail = product_service(&state)
        .detail(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("product"))?;
    Ok(Json(detail))
}

#[utoipa::path(get, path = "/api/services", tag = "catalog", responses((status = 200, description = "Workshop price list")))]
pub async fn workshop_services() -> Json<&'static [workshop::ServiceCategory]> {
    Json(workshop::SERVICES)
}
