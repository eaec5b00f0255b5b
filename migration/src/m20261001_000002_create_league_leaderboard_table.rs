use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueLeaderboard::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueLeaderboard::Id))
                    .col(integer(LeagueLeaderboard::LeagueId))
                    .col(string(LeagueLeaderboard::UserId))
                    .col(integer(LeagueLeaderboard::Score).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_leaderboard_league_id")
                            .from(LeagueLeaderboard::Table, LeagueLeaderboard::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_league_leaderboard_unique")
                            .col(LeagueLeaderboard::LeagueId)
                            .col(LeagueLeaderboard::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueLeaderboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueLeaderboard {
    Table,
    Id,
    LeagueId,
    UserId,
    Score,
}
