//! Create ideas table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ideas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ideas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ideas::Author).string_len(100).not_null())
                    .col(ColumnDef::new(Ideas::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Ideas::Content).text().not_null())
                    .col(
                        ColumnDef::new(Ideas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: created_at (newest-first feed)
        manager
            .create_index(
                Index::create()
                    .name("idx_ideas_created_at")
                    .table(Ideas::Table)
                    .col(Ideas::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ideas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Ideas {
    Table,
    Id,
    Author,
    Title,
    Content,
    CreatedAt,
}
