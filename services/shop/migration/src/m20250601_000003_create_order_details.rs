use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderDetails::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderDetails::OrderId).string_len(36).not_null())
                    .col(
                        ColumnDef::new(OrderDetails::ProductId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderDetails::Quantity).integer().not_null())
                    .col(ColumnDef::new(OrderDetails::Price).big_integer().not_null())
                    .col(ColumnDef::new(OrderDetails::Total).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_details_order_id")
                            .from(OrderDetails::Table, OrderDetails::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_details_product_id")
                            .from(OrderDetails::Table, OrderDetails::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(OrderDetails::Table)
                    .col(OrderDetails::OrderId)
                    .name("idx_order_details_order_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OrderDetails {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    Price,
    Total,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}
