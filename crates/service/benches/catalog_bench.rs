use criterion::{black_box, criterion_group, criterion_main, Criterion};

use service::catalog::{self, CatalogFilters};

const FIXTURES: [(&str, &str); 4] = [
    ("Intel i7, 16GB RAM, 512GB SSD, RTX 3060, 15.6'' Full HD", "$1,299"),
    ("AMD Ryzen 5, 8GB RAM, 256GB SSD, graficos integrados, 14''", "$649"),
    ("Intel Core 5, 32GB RAM, 1TB SSD, RTX 4070, 17.3'' QHD", "$1,899"),
    ("Intel i3, 8GB RAM, 500GB HDD, 15.6'' HD", "$429"),
];

fn bench_extract(c: &mut Criterion) {
    c.bench_function("catalog_extract_specs", |b| {
        b.iter(|| {
            for (d, p) in FIXTURES {
                let _ = catalog::extract_specs(black_box(d), black_box(p));
            }
        });
    });
}

fn bench_filter(c: &mut Criterion) {
    let products: Vec<_> = (0..200)
        .map(|i| {
            let (d, p) = FIXTURES[i % FIXTURES.len()];
            catalog::annotate(models::product::Model {
                id: uuid::Uuid::new_v4(),
                title: format!("Laptop {}", i),
                description: d.to_string(),
                price: p.into(),
                image: String::new(),
                category: "laptops".into(),
                is_offer: i % 3 == 0,
                in_stock: true,
                created_at: chrono::Utc::now().into(),
                updated_at: chrono::Utc::now().into(),
            })
        })
        .collect();
    let filters = CatalogFilters {
        brand: Some("Intel".into()),
        ram: Some("16".into()),
        price: Some("1000-1500".into()),
        ..Default::default()
    };

    c.bench_function("catalog_filter_200", |b| {
        b.iter(|| {
            let _ = catalog::filter_products(black_box(products.clone()), &filters);
        });
    });
}

criterion_group!(benches, bench_extract, bench_filter);
criterion_main!(benches);
