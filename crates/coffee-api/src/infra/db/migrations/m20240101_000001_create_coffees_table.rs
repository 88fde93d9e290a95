//! Migration: Create the coffees table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coffees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Coffees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Coffees::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Coffees::Price).decimal_len(12, 2).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coffees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Coffees {
    Table,
    Id,
    Name,
    Price,
}
