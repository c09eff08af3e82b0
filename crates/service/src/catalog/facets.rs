//! Facet aggregation for the storefront filter controls.

use serde::Serialize;

use super::extract::CpuBrand;
use super::CatalogProduct;

/// Fixed price-range buckets offered by the storefront UI.
/// Half-open on the upper bound; the last bucket is unbounded.
pub const PRICE_RANGES: [PriceRange; 4] = [
    PriceRange { key: "0-500", min: 0, max: Some(500) },
    PriceRange { key: "500-1000", min: 500, max: Some(1000) },
    PriceRange { key: "1000-1500", min: 1000, max: Some(1500) },
    PriceRange { key: "1500+", min: 1500, max: None },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub key: &'static str,
    pub min: u32,
    pub max: Option<u32>,
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && self.max.map_or(true, |m| price < m)
    }
}

/// Screen-size bucket key for a diagonal in inches.
pub fn screen_bucket(inches: f32) -> &'static str {
    if inches < 14.0 {
        "13"
    } else if inches < 15.0 {
        "14"
    } else if inches < 17.0 {
        "15"
    } else {
        "17"
    }
}

/// Distinct facet values actually present in a product list, plus the
/// fixed price-range table.
#[derive(Debug, Clone, Serialize)]
pub struct FilterValues {
    pub brands: Vec<&'static str>,
    pub ram_sizes: Vec<u32>,
    pub screens: Vec<&'static str>,
    pub price_ranges: Vec<PriceRange>,
}

/// Pure aggregation over the annotated list; no side effects.
pub fn unique_filter_values(products: &[CatalogProduct]) -> FilterValues {
    let mut brands = Vec::new();
    let mut ram_sizes = Vec::new();
    let mut screens = Vec::new();
    for p in products {
        if let Some(brand) = p.specs.processor.brand {
            let label = match brand {
                CpuBrand::Intel => "Intel",
                CpuBrand::Amd => "AMD",
            };
            if !brands.contains(&label) {
                brands.push(label);
            }
        }
        if let Some(ram) = p.specs.ram_gb {
            if !ram_sizes.contains(&ram) {
                ram_sizes.push(ram);
            }
        }
        if let Some(inches) = p.specs.screen_inches {
            let bucket = screen_bucket(inches);
            if !screens.contains(&bucket) {
                screens.push(bucket);
            }
        }
    }
    ram_sizes.sort_unstable();
    screens.sort_unstable();
    FilterValues { brands, ram_sizes, screens, price_ranges: PRICE_RANGES.to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::annotate;
    use chrono::Utc;
    use uuid::Uuid;

    fn product(description: &str, price: &str) -> CatalogProduct {
        let now = Utc::now().into();
        annotate(models::product::Model {
            id: Uuid::new_v4(),
            title: "p".into(),
            description: description.into(),
            price: price.into(),
            image: String::new(),
            category: "laptops".into(),
            is_offer: false,
            in_stock: true,
            created_at: now,
            updated_at: now,
        })
    }

    #[test]
    fn buckets_cover_typical_laptop_sizes() {
        assert_eq!(screen_bucket(13.3), "13");
        assert_eq!(screen_bucket(14.0), "14");
        assert_eq!(screen_bucket(15.6), "15");
        assert_eq!(screen_bucket(17.3), "17");
    }

    #[test]
    fn price_ranges_are_half_open() {
        assert!(PRICE_RANGES[0].contains(499));
        assert!(!PRICE_RANGES[0].contains(500));
        assert!(PRICE_RANGES[1].contains(500));
        assert!(PRICE_RANGES[3].contains(10_000));
    }

    #[test]
    fn aggregation_deduplicates_and_sorts_ram() {
        let products = vec![
            product("Intel i5, 16GB RAM, 15.6'' FHD", "$900"),
            product("Intel i7, 8GB RAM, 14\" FHD", "$1,100"),
            product("Ryzen 7, 16GB RAM, 15.6'' FHD", "$1,000"),
        ];
        let values = unique_filter_values(&products);
        assert_eq!(values.brands, vec!["Intel", "AMD"]);
        assert_eq!(values.ram_sizes, vec![8, 16]);
        assert_eq!(values.screens, vec!["14", "15"]);
        assert_eq!(values.price_ranges.len(), 4);
    }
}
