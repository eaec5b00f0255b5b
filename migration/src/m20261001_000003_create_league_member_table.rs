use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueMember::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueMember::Id))
                    .col(string(LeagueMember::GuildId))
                    .col(string(LeagueMember::UserId))
                    .col(timestamp(LeagueMember::CreatedAt).default(Expr::current_timestamp()))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_league_member_guild_user_unique")
                            .col(LeagueMember::GuildId)
                            .col(LeagueMember::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueMember {
    Table,
    Id,
    GuildId,
    UserId,
    CreatedAt,
}
