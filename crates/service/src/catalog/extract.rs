//! Facet extraction from free-text product descriptions.
//!
//! A fixed set of independent matchers, one per facet, each returning
//! an optional value; a facet that does not match is simply absent.
//! Matching is case-insensitive and first-match-wins per facet. The
//! patterns are deliberately best-effort: ambiguous descriptions can
//! mis-parse and that behavior is kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuBrand {
    Intel,
    #[serde(rename = "AMD")]
    Amd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageKind {
    Ssd,
    Hdd,
    Usf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsKind {
    Dedicated,
    Integrated,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessorSpec {
    pub brand: Option<CpuBrand>,
    pub series: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageSpec {
    pub kind: Option<StorageKind>,
    /// Normalized to GB (TB figures are multiplied by 1000).
    pub capacity_gb: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicsSpec {
    pub kind: GraphicsKind,
    pub model: Option<String>,
    pub vram_gb: Option<u32>,
}

impl Default for GraphicsSpec {
    fn default() -> Self {
        Self { kind: GraphicsKind::Integrated, model: None, vram_gb: None }
    }
}

/// Facets derived from a product's description and display price.
/// Never persisted; recomputed per request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedSpecs {
    pub processor: ProcessorSpec,
    pub ram_gb: Option<u32>,
    pub screen_inches: Option<f32>,
    pub storage: StorageSpec,
    pub graphics: GraphicsSpec,
    pub numeric_price: u32,
}

static INTEL_SERIES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bi([3579])\b").unwrap());
static INTEL_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(core|ultra)\s*([3579])\b").unwrap());
static RYZEN_SERIES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bryzen\s*([3579])\b").unwrap());
static RAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*gb\s*(?:ram|memory|ddr\d*)").unwrap());
static SCREEN: Lazy<Regex> = Lazy::new(|| Regex::new("(\\d+\\.?\\d*)\\s*[\"'\u{2033}]").unwrap());
static STORAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(gb|tb)\s*(ssd|hdd|usf)").unwrap());
static GPU_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)rtx|gtx|geforce|rx|radeon").unwrap());
static GPU_MODEL_NV: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(rtx|gtx)\s*(\d+)").unwrap());
static GPU_MODEL_AMD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\brx\s*(\d+)").unwrap());
static VRAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*gb\s*(?:rtx|gtx|geforce|rx|radeon)").unwrap());
static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s*(\d[\d,]*)").unwrap());

fn processor(text: &str) -> ProcessorSpec {
    let lower = text.to_lowercase();
    if lower.contains("intel") || INTEL_LITERAL.is_match(text) {
        let series = INTEL_SERIES
            .captures(text)
            .map(|c| format!("i{}", &c[1]))
            .or_else(|| {
                INTEL_LITERAL.captures(text).map(|c| {
                    let family = match c[1].to_lowercase().as_str() {
                        "core" => "Core",
                        _ => "Ultra",
                    };
                    format!("{} {}", family, &c[2])
                })
            });
        return ProcessorSpec { brand: Some(CpuBrand::Intel), series };
    }
    if lower.contains("amd") || lower.contains("ryzen") {
        let series = RYZEN_SERIES.captures(text).map(|c| format!("Ryzen {}", &c[1]));
        return ProcessorSpec { brand: Some(CpuBrand::Amd), series };
    }
    ProcessorSpec::default()
}

fn ram_gb(text: &str) -> Option<u32> {
    RAM.captures(text).and_then(|c| c[1].parse().ok())
}

fn screen_inches(text: &str) -> Option<f32> {
    SCREEN.captures(text).and_then(|c| c[1].parse().ok())
}

fn storage(text: &str) -> StorageSpec {
    let lower = text.to_lowercase();
    let kind = if lower.contains("ssd") {
        Some(StorageKind::Ssd)
    } else if lower.contains("hdd") {
        Some(StorageKind::Hdd)
    } else if lower.contains("usf") {
        Some(StorageKind::Usf)
    } else {
        None
    };
    let capacity_gb = STORAGE.captures(text).and_then(|c| {
        let n: u32 = c[1].parse().ok()?;
        match c[2].to_lowercase().as_str() {
            "tb" => Some(n.saturating_mul(1000)),
            _ => Some(n),
        }
    });
    StorageSpec { kind, capacity_gb }
}

fn graphics(text: &str) -> GraphicsSpec {
    if !GPU_TOKEN.is_match(text) {
        return GraphicsSpec::default();
    }
    let model = GPU_MODEL_NV
        .captures(text)
        .map(|c| format!("{} {}", c[1].to_uppercase(), &c[2]))
        .or_else(|| GPU_MODEL_AMD.captures(text).map(|c| format!("RX {}", &c[1])));
    let vram_gb = VRAM.captures(text).and_then(|c| c[1].parse().ok());
    GraphicsSpec { kind: GraphicsKind::Dedicated, model, vram_gb }
}

fn numeric_price(price: &str) -> u32 {
    PRICE
        .captures(price)
        .and_then(|c| c[1].replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// Extract all facets from a description and a display price string.
///
/// Pure and idempotent; safe to call on every request.
pub fn extract_specs(description: &str, price: &str) -> ExtractedSpecs {
    ExtractedSpecs {
        processor: processor(description),
        ram_gb: ram_gb(description),
        screen_inches: screen_inches(description),
        storage: storage(description),
        graphics: graphics(description),
        numeric_price: numeric_price(price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAMER: &str = "Intel i7, 16GB RAM, 512GB SSD, RTX 3060, 15.6'' Full HD";

    #[test]
    fn full_gamer_description_extracts_every_facet() {
        let s = extract_specs(GAMER, "$1,299");
        assert_eq!(s.processor.brand, Some(CpuBrand::Intel));
        assert_eq!(s.processor.series.as_deref(), Some("i7"));
        assert_eq!(s.ram_gb, Some(16));
        assert_eq!(s.storage.kind, Some(StorageKind::Ssd));
        assert_eq!(s.storage.capacity_gb, Some(512));
        assert_eq!(s.graphics.kind, GraphicsKind::Dedicated);
        assert_eq!(s.graphics.model.as_deref(), Some("RTX 3060"));
        assert_eq!(s.screen_inches, Some(15.6));
        assert_eq!(s.numeric_price, 1299);
    }

    #[test]
    fn ram_matches_any_case() {
        for d in ["16GB RAM", "16 gb ram", "16Gb Ram de fábrica", "16GB DDR4"] {
            assert_eq!(extract_specs(d, "").ram_gb, Some(16), "{}", d);
        }
    }

    #[test]
    fn ram_requires_a_memory_token() {
        assert_eq!(extract_specs("512GB SSD", "").ram_gb, None);
    }

    #[test]
    fn terabytes_normalize_to_gigabytes() {
        let s = extract_specs("1TB SSD", "");
        assert_eq!(s.storage.kind, Some(StorageKind::Ssd));
        assert_eq!(s.storage.capacity_gb, Some(1000));
    }

    #[test]
    fn hdd_and_usf_kinds_are_recognized() {
        assert_eq!(extract_specs("500GB HDD", "").storage.kind, Some(StorageKind::Hdd));
        assert_eq!(extract_specs("128GB USF", "").storage.kind, Some(StorageKind::Usf));
    }

    #[test]
    fn amd_brand_via_ryzen_token() {
        let s = extract_specs("Ryzen 5 5600H, 8GB RAM", "");
        assert_eq!(s.processor.brand, Some(CpuBrand::Amd));
        assert_eq!(s.processor.series.as_deref(), Some("Ryzen 5"));
    }

    #[test]
    fn intel_literal_series_are_recognized() {
        let s = extract_specs("Core 5 processor, 16GB RAM", "");
        assert_eq!(s.processor.brand, Some(CpuBrand::Intel));
        assert_eq!(s.processor.series.as_deref(), Some("Core 5"));

        let s = extract_specs("Intel Ultra 7 155H", "");
        assert_eq!(s.processor.series.as_deref(), Some("Ultra 7"));
    }

    #[test]
    fn unknown_processor_yields_none() {
        let p = extract_specs("Apple M2, 8GB RAM", "").processor;
        assert_eq!(p.brand, None);
        assert_eq!(p.series, None);
    }

    #[test]
    fn screen_size_accepts_quote_variants() {
        assert_eq!(extract_specs("14\" FHD", "").screen_inches, Some(14.0));
        assert_eq!(extract_specs("15.6'' IPS", "").screen_inches, Some(15.6));
        assert_eq!(extract_specs("17.3\u{2033} panel", "").screen_inches, Some(17.3));
        assert_eq!(extract_specs("sin pantalla", "").screen_inches, None);
    }

    #[test]
    fn integrated_graphics_is_the_default() {
        let g = extract_specs("Intel i5, 8GB RAM, UHD Graphics", "").graphics;
        assert_eq!(g.kind, GraphicsKind::Integrated);
        assert_eq!(g.model, None);
    }

    #[test]
    fn amd_gpu_model_is_captured() {
        let g = extract_specs("Radeon RX 6600 de 8GB", "").graphics;
        assert_eq!(g.kind, GraphicsKind::Dedicated);
        assert_eq!(g.model.as_deref(), Some("RX 6600"));
    }

    #[test]
    fn vram_needs_a_gb_figure_before_the_gpu_token() {
        let g = extract_specs("8GB RTX 4060", "").graphics;
        assert_eq!(g.vram_gb, Some(8));
        let g = extract_specs("RTX 4060 8GB", "").graphics;
        assert_eq!(g.vram_gb, None);
    }

    #[test]
    fn price_takes_first_dollar_figure_or_zero() {
        assert_eq!(extract_specs("", "$799").numeric_price, 799);
        assert_eq!(extract_specs("", "$1,299 antes $1,499").numeric_price, 1299);
        assert_eq!(extract_specs("", "consultar").numeric_price, 0);
        assert_eq!(extract_specs("", "").numeric_price, 0);
    }

    #[test]
    fn extraction_is_idempotent() {
        let a = extract_specs(GAMER, "$1,299");
        let b = extract_specs(GAMER, "$1,299");
        assert_eq!(a, b);
    }
}
