use crate::db::connect;
use crate::{admin_user, client, product, product_config, product_image, service_order, site_setting};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_client_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let name = format!("Cliente {}", Uuid::new_v4());
    let created = client::create(&db, &name, "555-0101", "Av. Central 1", "DOC-9", Some("c@example.com")).await?;
    assert_eq!(created.name, name);
    assert_eq!(created.email.as_deref(), Some("c@example.com"));

    let found = client::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());

    let updated = client::update(&db, created.id, None, Some("555-0202"), None, None, Some(None)).await?;
    assert_eq!(updated.phone, "555-0202");
    assert!(updated.email.is_none());

    client::hard_delete(&db, created.id).await?;
    let gone = client::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_client_validation_rejects_blank_fields() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;
    let res = client::create(&db, "", "555", "addr", "doc", None).await;
    assert!(res.is_err());
    let res = client::create(&db, "Ana", "555", "addr", "doc", Some("not-an-email")).await;
    assert!(res.is_err());
    Ok(())
}

#[tokio::test]
async fn test_product_crud_with_images_and_configs() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let p = product::create(
        &db,
        "Laptop Gamer X",
        "Intel i7, 16GB RAM, 512GB SSD, RTX 3060, 15.6'' Full HD",
        "$1,299",
        "/img/laptop-x.jpg",
        "laptops",
        true,
        true,
    )
    .await?;
    assert!(p.is_offer);

    let img = product_image::add(&db, p.id, "/img/laptop-x-2.jpg", 1).await?;
    let imgs = product_image::list_for_product(&db, p.id).await?;
    assert_eq!(imgs.len(), 1);
    assert_eq!(imgs[0].id, img.id);

    let attrs = serde_json::json!({"ram": "16GB", "storage": "512GB SSD"});
    let cfg = product_config::create(&db, p.id, "LPX-16GB-512GB-SSD", "Laptop Gamer X (16GB, 512GB SSD)", attrs, "$1,299").await?;
    let cfgs = product_config::list_for_product(&db, p.id).await?;
    assert_eq!(cfgs.len(), 1);
    assert_eq!(cfgs[0].sku, cfg.sku);

    let with_images = product::Entity::find_by_id(p.id)
        .find_with_related(product_image::Entity)
        .all(&db)
        .await?;
    assert_eq!(with_images.len(), 1);
    assert_eq!(with_images[0].1.len(), 1);

    let updated = product::update(&db, p.id, None, None, Some("$1,199"), None, None, Some(false), None).await?;
    assert_eq!(updated.price, "$1,199");
    assert!(!updated.is_offer);

    // Cascade removes children
    product::hard_delete(&db, p.id).await?;
    let imgs = product_image::Entity::find()
        .filter(product_image::Column::ProductId.eq(p.id))
        .all(&db)
        .await?;
    assert!(imgs.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_service_order_lifecycle() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let c = client::create(&db, "Orden Cliente", "555-0303", "Calle 2", "DOC-1", None).await?;
    let items = vec![service_order::OrderItem {
        category: "Reparación".into(),
        subcategory: "Laptop".into(),
        option: "Cambio de pantalla".into(),
        price: 120.0,
    }];
    let order = service_order::create(&db, c.id, "Laptop HP", "no enciende", "alta", &items, 120.0).await?;
    assert_eq!(order.status, "Recibido");
    assert_eq!(order.urgency, "alta");
    assert_eq!(service_order::items_from_json(&order.items)?, items);

    let order = service_order::set_status(&db, order.id, "En proceso").await?;
    assert_eq!(order.status, "En proceso");

    assert!(service_order::set_status(&db, order.id, "Perdido").await.is_err());

    let order = service_order::update(&db, order.id, None, Some("pantalla rota"), Some("urgente"), None, Some(135.0)).await?;
    assert_eq!(order.urgency, "urgente");
    assert_eq!(order.total, 135.0);

    service_order::hard_delete(&db, order.id).await?;
    client::hard_delete(&db, c.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_site_setting_upsert() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let key = format!("banner_{}", Uuid::new_v4());
    let v1 = site_setting::upsert(&db, &key, serde_json::json!({"text": "Gran apertura"})).await?;
    assert_eq!(v1.value["text"], "Gran apertura");

    let v2 = site_setting::upsert(&db, &key, serde_json::json!({"text": "Rebajas"})).await?;
    assert_eq!(v2.value["text"], "Rebajas");

    let got = site_setting::get(&db, &key).await?;
    assert_eq!(got.unwrap().value["text"], "Rebajas");

    site_setting::Entity::delete_by_id(key.clone()).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_admin_user_soft_delete() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let email = format!("admin_{}@example.com", Uuid::new_v4());
    let u = admin_user::create(&db, &email, "Admin").await?;
    admin_user::soft_delete(&db, u.id).await?;

    let found = admin_user::Entity::find_by_id(u.id).one(&db).await?;
    assert!(found.unwrap().deleted_at.is_some());

    admin_user::hard_delete(&db, u.id).await?;
    Ok(())
}
