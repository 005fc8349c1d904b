use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(uuid(Author::Id).primary_key())
                    .col(string(Author::FirstName))
                    .col(string(Author::LastName))
                    .col(date(Author::DateOfBirth))
                    .col(date_null(Author::DateOfDeath))
                    .col(string(Author::Genre))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Author {
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    DateOfDeath,
    Genre,
}
