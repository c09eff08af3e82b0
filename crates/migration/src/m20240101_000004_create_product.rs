//! Create `product` table.
//!
//! `description` is free text; catalog facets are extracted from it at
//! request time and never stored. `price` is the display string shown
//! on the storefront.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_len(Product::Title, 255).not_null())
                    .col(text(Product::Description).not_null())
                    .col(string_len(Product::Price, 64).not_null())
                    .col(string_len(Product::Image, 512).not_null())
                    .col(string_len(Product::Category, 64).not_null())
                    .col(boolean(Product::IsOffer).not_null().default(false))
                    .col(boolean(Product::InStock).not_null().default(true))
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Product::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Id, Title, Description, Price, Image, Category, IsOffer, InStock, CreatedAt, UpdatedAt }
