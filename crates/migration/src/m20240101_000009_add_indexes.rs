//! Secondary indexes for the hot lookup paths: storefront category
//! filtering, order dashboards, and per-product child rows.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_order_status")
                    .table(ServiceOrder::Table)
                    .col(ServiceOrder::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_order_client")
                    .table(ServiceOrder::Table)
                    .col(ServiceOrder::ClientId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_product_image_product")
                    .table(ProductImage::Table)
                    .col(ProductImage::ProductId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_product_config_product")
                    .table(ProductConfig::Table)
                    .col(ProductConfig::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_config_product").table(ProductConfig::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_image_product").table(ProductImage::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_order_client").table(ServiceOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_order_status").table(ServiceOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_category").table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Category }

#[derive(DeriveIden)]
enum ServiceOrder { Table, ClientId, Status }

#[derive(DeriveIden)]
enum ProductImage { Table, ProductId }

#[derive(DeriveIden)]
enum ProductConfig { Table, ProductId }
