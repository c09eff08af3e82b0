//! Create `product_image` table with FK to `product`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductImage::Table)
                    .if_not_exists()
                    .col(uuid(ProductImage::Id).primary_key())
                    .col(uuid(ProductImage::ProductId).not_null())
                    .col(string_len(ProductImage::Url, 512).not_null())
                    .col(integer(ProductImage::Position).not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_image_product")
                            .from(ProductImage::Table, ProductImage::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductImage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductImage { Table, Id, ProductId, Url, Position }

#[derive(DeriveIden)]
enum Product { Table, Id }
