//! Product variant generation for the admin configuration manager.
//!
//! Given a base product and a set of attribute axes, generate the
//! cartesian product of variants, each with a deterministic SKU and a
//! display label. Pure; persistence of chosen variants happens in the
//! products service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One configurable attribute and the values it may take,
/// e.g. `ram` -> `["8GB", "16GB"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeAxis {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub sku: String,
    pub label: String,
    pub attributes: BTreeMap<String, String>,
}

/// Uppercase, non-alphanumerics collapsed to a single `-`, no leading
/// or trailing separator.
fn sku_fragment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_sep = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Generate every combination of the given axes, in axis order.
///
/// Axes with no values are skipped. With no usable axes the result is a
/// single variant carrying just the prefix and title.
pub fn generate_variants(title: &str, sku_prefix: &str, axes: &[AttributeAxis]) -> Vec<Variant> {
    let prefix = sku_fragment(sku_prefix);
    let axes: Vec<&AttributeAxis> = axes.iter().filter(|a| !a.values.is_empty()).collect();

    let mut combos: Vec<Vec<(String, String)>> = vec![Vec::new()];
    for axis in &axes {
        let mut next = Vec::with_capacity(combos.len() * axis.values.len());
        for combo in &combos {
            for value in &axis.values {
                let mut extended = combo.clone();
                extended.push((axis.name.clone(), value.clone()));
                next.push(extended);
            }
        }
        combos = next;
    }

    combos
        .into_iter()
        .map(|combo| {
            let mut sku = prefix.clone();
            for (_, value) in &combo {
                let frag = sku_fragment(value);
                if !frag.is_empty() {
                    if !sku.is_empty() {
                        sku.push('-');
                    }
                    sku.push_str(&frag);
                }
            }
            let label = if combo.is_empty() {
                title.to_string()
            } else {
                let values: Vec<&str> = combo.iter().map(|(_, v)| v.as_str()).collect();
                format!("{} ({})", title, values.join(", "))
            };
            let attributes = combo.into_iter().collect();
            Variant { sku, label, attributes }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(name: &str, values: &[&str]) -> AttributeAxis {
        AttributeAxis { name: name.into(), values: values.iter().map(|v| v.to_string()).collect() }
    }

    #[test]
    fn cartesian_product_in_axis_order() {
        let axes = vec![axis("ram", &["8GB", "16GB"]), axis("storage", &["256GB SSD", "512GB SSD"])];
        let variants = generate_variants("Laptop Pro", "LPX", &axes);
        assert_eq!(variants.len(), 4);
        assert_eq!(variants[0].sku, "LPX-8GB-256GB-SSD");
        assert_eq!(variants[3].sku, "LPX-16GB-512GB-SSD");
        assert_eq!(variants[1].label, "Laptop Pro (8GB, 512GB SSD)");
        assert_eq!(variants[2].attributes["ram"], "16GB");
    }

    #[test]
    fn no_axes_yields_single_base_variant() {
        let variants = generate_variants("Laptop Pro", "LPX", &[]);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].sku, "LPX");
        assert_eq!(variants[0].label, "Laptop Pro");
        assert!(variants[0].attributes.is_empty());
    }

    #[test]
    fn empty_axes_are_skipped() {
        let axes = vec![axis("ram", &["8GB"]), axis("color", &[])];
        let variants = generate_variants("Mini PC", "MPC", &axes);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].sku, "MPC-8GB");
    }

    #[test]
    fn sku_fragments_collapse_punctuation() {
        let axes = vec![axis("storage", &["1TB NVMe (Gen4)"])];
        let variants = generate_variants("Torre", "TWR", &axes);
        assert_eq!(variants[0].sku, "TWR-1TB-NVME-GEN4");
    }

    #[test]
    fn generation_is_deterministic() {
        let axes = vec![axis("ram", &["8GB", "16GB"])];
        assert_eq!(generate_variants("X", "X1", &axes), generate_variants("X", "X1", &axes));
    }
}
