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
                    .table(LeagueInvitation::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueInvitation::Id))
                    .col(integer(LeagueInvitation::MemberId))
                    .col(integer(LeagueInvitation::LeagueId))
                    .col(timestamp(LeagueInvitation::InvitedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_invitation_member_id")
                            .from(LeagueInvitation::Table, LeagueInvitation::MemberId)
                            .to(LeagueMember::Table, LeagueMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_invitation_league_id")
                            .from(LeagueInvitation::Table, LeagueInvitation::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_league_invitation_unique")
                            .col(LeagueInvitation::MemberId)
                            .col(LeagueInvitation::LeagueId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueInvitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueInvitation {
    Table,
    Id,
    MemberId,
    LeagueId,
    InvitedAt,
}
