use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Orders::Address).text().not_null())
                    .col(ColumnDef::new(Orders::Passcode).string())
                    .col(ColumnDef::new(Orders::PaidAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Orders::PaidBank).string_len(255))
                    .col(ColumnDef::new(Orders::PaidAccountNumber).string_len(255))
                    .col(ColumnDef::new(Orders::GrandTotal).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    Email,
    Address,
    Passcode,
    PaidAt,
    PaidBank,
    PaidAccountNumber,
    GrandTotal,
}
