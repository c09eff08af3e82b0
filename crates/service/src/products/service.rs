use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::catalog::{self, CatalogFilters, CatalogProduct, FilterValues, SortBy};
use crate::errors::ServiceError;
use crate::products::repository::ProductRepository;
use crate::sku::{generate_variants, AttributeAxis, Variant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub is_offer: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Product with specs and gallery images, as shown on the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub catalog: CatalogProduct,
    pub images: Vec<models::product_image::Model>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub is_offer: Option<bool>,
    pub in_stock: Option<bool>,
}

/// Application service for the product catalog and its admin surface.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Storefront listing: annotate with extracted specs, then filter
    /// and sort in memory.
    pub async fn storefront(
        &self,
        filters: &CatalogFilters,
        sort_by: Option<SortBy>,
    ) -> Result<Vec<CatalogProduct>, ServiceError> {
        let rows = self.repo.list(None).await?;
        let annotated: Vec<CatalogProduct> = rows.into_iter().map(catalog::annotate).collect();
        let mut out = catalog::filter_products(annotated, filters);
        if let Some(sort) = sort_by {
            out = catalog::sort_products(out, sort);
        }
        Ok(out)
    }

    /// Facet values for the filter controls, derived from the full list.
    pub async fn facets(&self) -> Result<FilterValues, ServiceError> {
        let rows = self.repo.list(None).await?;
        let annotated: Vec<CatalogProduct> = rows.into_iter().map(catalog::annotate).collect();
        Ok(catalog::unique_filter_values(&annotated))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<CatalogProduct>, ServiceError> {
        Ok(self.repo.get(id).await?.map(catalog::annotate))
    }

    /// Storefront detail view: specs plus the gallery images.
    pub async fn detail(&self, id: Uuid) -> Result<Option<ProductDetail>, ServiceError> {
        let catalog = match self.repo.get(id).await? {
            Some(p) => catalog::annotate(p),
            None => return Ok(None),
        };
        let images = self.repo.list_images(id).await?;
        Ok(Some(ProductDetail { catalog, images }))
    }

    pub async fn list(&self) -> Result<Vec<models::product::Model>, ServiceError> {
        self.repo.list(None).await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: &ProductInput) -> Result<models::product::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(product_id = %created.id, "product_created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<models::product::Model, ServiceError> {
        self.require_product(id).await?;
        self.repo.update(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.repo.delete(id).await
    }

    pub async fn images(&self, product_id: Uuid) -> Result<Vec<models::product_image::Model>, ServiceError> {
        self.require_product(product_id).await?;
        self.repo.list_images(product_id).await
    }

    pub async fn add_image(&self, product_id: Uuid, url: &str, position: i32) -> Result<models::product_image::Model, ServiceError> {
        self.require_product(product_id).await?;
        self.repo.add_image(product_id, url, position).await
    }

    pub async fn delete_image(&self, product_id: Uuid, image_id: Uuid) -> Result<bool, ServiceError> {
        self.require_product(product_id).await?;
        let owns = self.repo.list_images(product_id).await?.iter().any(|i| i.id == image_id);
        if !owns {
            return Ok(false);
        }
        self.repo.delete_image(image_id).await
    }

    pub async fn configs(&self, product_id: Uuid) -> Result<Vec<models::product_config::Model>, ServiceError> {
        self.require_product(product_id).await?;
        self.repo.list_configs(product_id).await
    }

    /// Preview the variants the given axes would generate, without
    /// persisting anything.
    pub async fn preview_configs(
        &self,
        product_id: Uuid,
        sku_prefix: &str,
        axes: &[AttributeAxis],
    ) -> Result<Vec<Variant>, ServiceError> {
        let product = self
            .repo
            .get(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        Ok(generate_variants(&product.title, sku_prefix, axes))
    }

    /// Generate variants and persist each as a `product_config` row.
    #[instrument(skip(self, axes), fields(product_id = %product_id))]
    pub async fn generate_configs(
        &self,
        product_id: Uuid,
        sku_prefix: &str,
        axes: &[AttributeAxis],
        price: &str,
    ) -> Result<Vec<models::product_config::Model>, ServiceError> {
        let product = self
            .repo
            .get(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        let variants = generate_variants(&product.title, sku_prefix, axes);
        let mut saved = Vec::with_capacity(variants.len());
        for v in variants {
            let attributes = serde_json::to_value(&v.attributes)
                .map_err(|e| ServiceError::Validation(e.to_string()))?;
            saved.push(self.repo.add_config(product_id, &v.sku, &v.label, attributes, price).await?);
        }
        info!(count = saved.len(), "product_configs_generated");
        Ok(saved)
    }

    pub async fn delete_config(&self, product_id: Uuid, config_id: Uuid) -> Result<bool, ServiceError> {
        self.require_product(product_id).await?;
        let owns = self.repo.list_configs(product_id).await?.iter().any(|c| c.id == config_id);
        if !owns {
            return Ok(false);
        }
        self.repo.delete_config(config_id).await
    }

    async fn require_product(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo
            .get(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("product"))
    }
}
