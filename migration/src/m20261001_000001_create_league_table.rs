use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(pk_auto(League::Id))
                    .col(string(League::GuildId))
                    .col(string(League::Name))
                    .col(string(League::OwnerId))
                    .col(text(League::Jobs))
                    .col(text(League::Latest))
                    .col(timestamp(League::CreatedAt).default(Expr::current_timestamp()))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_league_guild_name_unique")
                            .col(League::GuildId)
                            .col(League::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum League {
    Table,
    Id,
    GuildId,
    Name,
    OwnerId,
    Jobs,
    Latest,
    CreatedAt,
}
