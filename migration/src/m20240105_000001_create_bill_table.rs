use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(date(Bill::DueDate))
                    .col(date_null(Bill::PaymentDate))
                    .col(decimal_len(Bill::Amount, 19, 2))
                    .col(string(Bill::Description))
                    .col(string(Bill::DescriptionSearch))
                    .col(string_len(Bill::Status, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bill_due_date")
                    .table(Bill::Table)
                    .col(Bill::DueDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    DueDate,
    PaymentDate,
    Amount,
    Description,
    DescriptionSearch,
    Status,
}
