use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_league_table::League;
use super::m20261001_000003_create_league_member_table::LeagueMember;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueJoined::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueJoined::Id))
                    .col(integer(LeagueJoined::MemberId))
                    .col(integer(LeagueJoined::LeagueId))
                    .col(timestamp(LeagueJoined::JoinedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_joined_member_id")
                            .from(LeagueJoined::Table, LeagueJoined::MemberId)
                            .to(LeagueMember::Table, LeagueMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_joined_league_id")
                            .from(LeagueJoined::Table, LeagueJoined::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_league_joined_unique")
                            .col(LeagueJoined::MemberId)
                            .col(LeagueJoined::LeagueId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueJoined::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueJoined {
    Table,
    Id,
    MemberId,
    LeagueId,
    JoinedAt,
}
