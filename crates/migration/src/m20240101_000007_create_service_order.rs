//! Create `service_order` table with FK to `client`.
//!
//! `items` is a JSON array of selected workshop services; `urgency`
//! and `status` are validated string enums.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceOrder::Table)
                    .if_not_exists()
                    .col(uuid(ServiceOrder::Id).primary_key())
                    .col(uuid(ServiceOrder::ClientId).not_null())
                    .col(string_len(ServiceOrder::Equipment, 255).not_null())
                    .col(text(ServiceOrder::Problem).not_null())
                    .col(string_len(ServiceOrder::Urgency, 16).not_null())
                    .col(json_binary(ServiceOrder::Items).not_null())
                    .col(double(ServiceOrder::Total).not_null())
                    .col(string_len(ServiceOrder::Status, 32).not_null())
                    .col(timestamp_with_time_zone(ServiceOrder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServiceOrder::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_order_client")
                            .from(ServiceOrder::Table, ServiceOrder::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceOrder { Table, Id, ClientId, Equipment, Problem, Urgency, Items, Total, Status, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Client { Table, Id }
