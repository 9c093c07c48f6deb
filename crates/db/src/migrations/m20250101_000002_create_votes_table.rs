//! Create votes table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Votes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Votes::IdeaId).integer().not_null())
                    .col(ColumnDef::new(Votes::Username).string_len(100).not_null())
                    .col(ColumnDef::new(Votes::VoteType).string_len(10).not_null())
                    .check(Expr::col(Votes::VoteType).is_in(["up", "down"]))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_idea")
                            .from(Votes::Table, Votes::IdeaId)
                            .to(Ideas::Table, Ideas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (idea_id, username) - one vote per voter per idea.
        // The vote upsert's ON CONFLICT target depends on it.
        manager
            .create_index(
                Index::create()
                    .name("idx_votes_idea_username")
                    .table(Votes::Table)
                    .col(Votes::IdeaId)
                    .col(Votes::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Votes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Votes {
    Table,
    Id,
    IdeaId,
    Username,
    VoteType,
}

#[derive(Iden)]
enum Ideas {
    Table,
    Id,
}
