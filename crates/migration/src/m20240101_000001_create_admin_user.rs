//! Create `admin_user` table.
//!
//! Back-office operators; includes soft-delete timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(uuid(AdminUser::Id).primary_key())
                    .col(string_len(AdminUser::Email, 255).unique_key().not_null())
                    .col(string_len(AdminUser::Name, 128).not_null())
                    .col(string_len(AdminUser::Status, 32).not_null())
                    .col(timestamp_with_time_zone(AdminUser::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AdminUser::UpdatedAt).not_null())
                    // Explicitly define nullable deleted_at to avoid conflicting NULL/NOT NULL
                    .col(
                        ColumnDef::new(AdminUser::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AdminUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AdminUser { Table, Id, Email, Name, Status, CreatedAt, UpdatedAt, DeletedAt }
