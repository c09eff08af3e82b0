//! Maintenance script: run migrations and load demo catalog data.
//!
//! Usage: `cargo run --bin seed` (reads DATABASE_URL from .env).

use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

struct DemoProduct {
    title: &'static str,
    description: &'static str,
    price: &'static str,
    category: &'static str,
    is_offer: bool,
}

const DEMO_PRODUCTS: &[DemoProduct] = &[
    DemoProduct {
        title: "Laptop Gamer Pro X15",
        description: "Intel i7, 16GB RAM, 512GB SSD, RTX 3060, 15.6'' Full HD",
        price: "$1,299",
        category: "laptops",
        is_offer: true,
    },
    DemoProduct {
        title: "Ultrabook Air S13",
        description: "Intel Core 5, 8GB RAM, 256GB SSD, graficos integrados, 13.3''",
        price: "$749",
        category: "laptops",
        is_offer: false,
    },
    DemoProduct {
        title: "Workstation Ryzen Creator",
        description: "AMD Ryzen 9, 32GB RAM DDR5, 1TB SSD, RX 7800, 17.3'' QHD",
        price: "$2,199",
        category: "laptops",
        is_offer: false,
    },
    DemoProduct {
        title: "PC Escritorio Oficina",
        description: "Intel i3, 8GB RAM, 500GB HDD, graficos integrados",
        price: "$429",
        category: "desktops",
        is_offer: true,
    },
    DemoProduct {
        title: "Monitor UltraWide 29",
        description: "29'' IPS 2560x1080, 75Hz",
        price: "$199",
        category: "accesorios",
        is_offer: false,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrations_applied", "schema is up to date");

    for p in DEMO_PRODUCTS {
        let created = models::product::create(
            &db,
            p.title,
            p.description,
            p.price,
            "",
            p.category,
            p.is_offer,
            true,
        )
        .await?;
        println!("seeded product {} ({})", created.title, created.id);
    }

    let client = models::client::create(
        &db,
        "Cliente Demo",
        "555-0100",
        "Av. Principal 1",
        "demo-0001",
        Some("demo@example.com"),
    )
    .await?;
    println!("seeded client {} ({})", client.name, client.id);

    models::site_setting::upsert(
        &db,
        "storefront",
        serde_json::json!({
            "banner": "Bienvenido a CompuMax",
            "phone": "555-0100",
            "address": "Av. Principal 1"
        }),
    )
    .await?;
    println!("seeded storefront settings");

    println!("done; register a back-office user via POST /auth/register");
    Ok(())
}
