//! In-memory filtering and sorting of the annotated product list.
//!
//! Filtering is a conjunction of independent per-facet predicates; a
//! filter set to `"all"` (or left empty) is a no-op. Both functions are
//! pure and cheap enough to re-run on every request.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Deserialize;

use super::extract::{CpuBrand, GraphicsKind};
use super::facets::{screen_bucket, PRICE_RANGES};
use super::CatalogProduct;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFilters {
    pub category: Option<String>,
    /// Processor brand: "Intel" or "AMD".
    pub brand: Option<String>,
    /// Minimum RAM in GB.
    pub ram: Option<String>,
    /// Screen bucket key ("13", "14", "15", "17").
    pub screen: Option<String>,
    /// Price-range key from `PRICE_RANGES`.
    pub price: Option<String>,
    /// "dedicated" or "integrated".
    pub graphics: Option<String>,
    /// Only products flagged as offers.
    pub offers: Option<bool>,
    /// Case-insensitive substring over title + description.
    pub search: Option<String>,
}

/// `"all"`, blank, and absent values all mean "no filter".
fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(v) if v.eq_ignore_ascii_case("all") => None,
        Some(v) => Some(v),
    }
}

fn matches(p: &CatalogProduct, filters: &CatalogFilters) -> bool {
    if let Some(category) = active(&filters.category) {
        if !p.product.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }
    if let Some(brand) = active(&filters.brand) {
        let want = match brand.to_lowercase().as_str() {
            "intel" => Some(CpuBrand::Intel),
            "amd" => Some(CpuBrand::Amd),
            _ => None,
        };
        if want.is_none() || p.specs.processor.brand != want {
            return false;
        }
    }
    if let Some(ram) = active(&filters.ram) {
        let min: u32 = ram.parse().unwrap_or(0);
        if p.specs.ram_gb.map_or(true, |r| r < min) {
            return false;
        }
    }
    if let Some(screen) = active(&filters.screen) {
        if p.specs.screen_inches.map_or(true, |s| screen_bucket(s) != screen) {
            return false;
        }
    }
    if let Some(price) = active(&filters.price) {
        let Some(range) = PRICE_RANGES.iter().find(|r| r.key == price) else {
            return false;
        };
        if !range.contains(p.specs.numeric_price) {
            return false;
        }
    }
    if let Some(graphics) = active(&filters.graphics) {
        let want = match graphics.to_lowercase().as_str() {
            "dedicated" => Some(GraphicsKind::Dedicated),
            "integrated" => Some(GraphicsKind::Integrated),
            _ => None,
        };
        if want.map_or(true, |w| p.specs.graphics.kind != w) {
            return false;
        }
    }
    if filters.offers == Some(true) && !p.product.is_offer {
        return false;
    }
    if let Some(search) = active(&filters.search) {
        let needle = search.to_lowercase();
        let haystack = format!("{} {}", p.product.title, p.product.description).to_lowercase();
        if !haystack.contains(&needle) {
            return false;
        }
    }
    true
}

/// Keep only products matching every active filter.
pub fn filter_products(products: Vec<CatalogProduct>, filters: &CatalogFilters) -> Vec<CatalogProduct> {
    products.into_iter().filter(|p| matches(p, filters)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortBy::PriceAsc),
            "price-desc" => Ok(SortBy::PriceDesc),
            "name-asc" => Ok(SortBy::TitleAsc),
            "name-desc" => Ok(SortBy::TitleDesc),
            _ => Err(()),
        }
    }
}

/// Stable sort by extracted price or title; ties keep input order.
pub fn sort_products(mut products: Vec<CatalogProduct>, sort_by: SortBy) -> Vec<CatalogProduct> {
    products.sort_by(|a, b| match sort_by {
        SortBy::PriceAsc => a.specs.numeric_price.cmp(&b.specs.numeric_price),
        SortBy::PriceDesc => b.specs.numeric_price.cmp(&a.specs.numeric_price),
        SortBy::TitleAsc => cmp_title(&a.product.title, &b.product.title),
        SortBy::TitleDesc => cmp_title(&b.product.title, &a.product.title),
    });
    products
}

fn cmp_title(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::annotate;
    use chrono::Utc;
    use uuid::Uuid;

    fn product(title: &str, description: &str, price: &str, category: &str, offer: bool) -> CatalogProduct {
        let now = Utc::now().into();
        annotate(models::product::Model {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            price: price.into(),
            image: String::new(),
            category: category.into(),
            is_offer: offer,
            in_stock: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn fixture() -> Vec<CatalogProduct> {
        vec![
            product("Laptop Gamer X", "Intel i7, 16GB RAM, 512GB SSD, RTX 3060, 15.6'' Full HD", "$1,299", "laptops", true),
            product("Laptop Oficina", "Intel i5, 8GB RAM, 256GB SSD, 14\" HD", "$649", "laptops", false),
            product("PC Creator", "Ryzen 7, 32GB RAM, 1TB SSD, RX 6700", "$1,599", "desktops", false),
            product("Monitor Pro", "27'' IPS, 144Hz", "$349", "monitors", true),
        ]
    }

    #[test]
    fn no_filters_keeps_everything() {
        let out = filter_products(fixture(), &CatalogFilters::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn all_value_is_a_noop() {
        let filters = CatalogFilters { category: Some("all".into()), brand: Some("ALL".into()), ..Default::default() };
        assert_eq!(filter_products(fixture(), &filters).len(), 4);
    }

    #[test]
    fn ram_filter_is_a_minimum_threshold() {
        let filters = CatalogFilters { ram: Some("16".into()), ..Default::default() };
        let out = filter_products(fixture(), &filters);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.specs.ram_gb.unwrap() >= 16));
    }

    #[test]
    fn filters_are_a_conjunction() {
        let filters = CatalogFilters {
            category: Some("laptops".into()),
            brand: Some("Intel".into()),
            ram: Some("16".into()),
            ..Default::default()
        };
        let out = filter_products(fixture(), &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product.title, "Laptop Gamer X");
    }

    #[test]
    fn price_bucket_filter() {
        let filters = CatalogFilters { price: Some("1000-1500".into()), ..Default::default() };
        let out = filter_products(fixture(), &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].specs.numeric_price, 1299);
    }

    #[test]
    fn graphics_kind_filter() {
        let filters = CatalogFilters { graphics: Some("dedicated".into()), ..Default::default() };
        let out = filter_products(fixture(), &filters);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn offers_filter() {
        let filters = CatalogFilters { offers: Some(true), ..Default::default() };
        let out = filter_products(fixture(), &filters);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.product.is_offer));
    }

    #[test]
    fn search_spans_title_and_description() {
        let filters = CatalogFilters { search: Some("creator".into()), ..Default::default() };
        assert_eq!(filter_products(fixture(), &filters).len(), 1);
        let filters = CatalogFilters { search: Some("ips".into()), ..Default::default() };
        assert_eq!(filter_products(fixture(), &filters).len(), 1);
        let filters = CatalogFilters { search: Some("zzz".into()), ..Default::default() };
        assert!(filter_products(fixture(), &filters).is_empty());
    }

    #[test]
    fn price_asc_is_non_decreasing() {
        let out = sort_products(fixture(), SortBy::PriceAsc);
        let prices: Vec<u32> = out.iter().map(|p| p.specs.numeric_price).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable();
        assert_eq!(prices, sorted);
    }

    #[test]
    fn title_sort_ignores_case() {
        let out = sort_products(fixture(), SortBy::TitleAsc);
        assert_eq!(out[0].product.title, "Laptop Gamer X");
        let out = sort_products(fixture(), SortBy::TitleDesc);
        assert_eq!(out[0].product.title, "PC Creator");
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("price-asc".parse::<SortBy>(), Ok(SortBy::PriceAsc));
        assert!("featured".parse::<SortBy>().is_err());
    }
}
