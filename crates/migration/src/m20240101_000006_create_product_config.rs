//! Create `product_config` table with FK to `product`.
//!
//! Stores admin-generated product variants (SKU + attribute set).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductConfig::Table)
                    .if_not_exists()
                    .col(uuid(ProductConfig::Id).primary_key())
                    .col(uuid(ProductConfig::ProductId).not_null())
                    .col(string_len(ProductConfig::Sku, 128).not_null())
                    .col(string_len(ProductConfig::Label, 255).not_null())
                    .col(json_binary(ProductConfig::Attributes).not_null())
                    .col(string_len(ProductConfig::Price, 64).not_null())
                    .col(timestamp_with_time_zone(ProductConfig::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_config_product")
                            .from(ProductConfig::Table, ProductConfig::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductConfig::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductConfig { Table, Id, ProductId, Sku, Label, Attributes, Price, CreatedAt }

#[derive(DeriveIden)]
enum Product { Table, Id }
