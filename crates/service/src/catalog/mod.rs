//! Storefront catalog logic: facet extraction from free-text product
//! descriptions, in-memory filtering/sorting, and facet aggregation.
//!
//! Everything in this module is pure and synchronous; it is recomputed
//! on every request and nothing here is ever persisted.

mod extract;
mod facets;
mod filter;

pub use extract::{extract_specs, CpuBrand, ExtractedSpecs, GraphicsKind, GraphicsSpec, ProcessorSpec, StorageKind, StorageSpec};
pub use facets::{screen_bucket, unique_filter_values, FilterValues, PriceRange, PRICE_RANGES};
pub use filter::{filter_products, sort_products, CatalogFilters, SortBy};

use serde::Serialize;

/// A product annotated with the facets extracted from its description.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogProduct {
    #[serde(flatten)]
    pub product: models::product::Model,
    pub specs: ExtractedSpecs,
}

/// Attach extracted specs to a raw product row.
pub fn annotate(product: models::product::Model) -> CatalogProduct {
    let specs = extract_specs(&product.description, &product.price);
    CatalogProduct { product, specs }
}
