//! Pending invitations, one row per (member record, league).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for the pending invitations of member records.
pub struct InvitationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending invitation for a member record.
    ///
    /// # Returns
    /// - `Ok(())` - The row was inserted
    /// - `Err(DbErr)` - Database error, including a duplicate (member, league) pair
    pub async fn create(&self, member_id: i32, league_id: i32) -> Result<(), DbErr> {
        entity::league_invitation::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            league_id: ActiveValue::Set(league_id),
            invited_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether a member record has a pending invitation for the league.
    pub async fn exists(&self, member_id: i32, league_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::LeagueInvitation::find()
            .filter(entity::league_invitation::Column::MemberId.eq(member_id))
            .filter(entity::league_invitation::Column::LeagueId.eq(league_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the pending invitation of a member record for the league.
    ///
    /// # Returns
    /// - `Ok(true)` - The row existed and was deleted
    /// - `Ok(false)` - There was nothing to delete
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, member_id: i32, league_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LeagueInvitation::delete_many()
            .filter(entity::league_invitation::Column::MemberId.eq(member_id))
            .filter(entity::league_invitation::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the names of the leagues referenced by a member record's pending invitations, oldest first.
    pub async fn get_league_names(&self, member_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::LeagueInvitation::find()
            .filter(entity::league_invitation::Column::MemberId.eq(member_id))
            .order_by_asc(entity::league_invitation::Column::Id)
            .find_also_related(entity::prelude::League)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, league)| league.map(|league| league.name))
            .collect())
    }
}
