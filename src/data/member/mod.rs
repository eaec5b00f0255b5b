//! Member record data repository.
//!
//! A member record exists once per (guild, user) pair. Pending invitations and joined
//! leagues hang off the record through `InvitationRepository` and
//! `JoinedLeagueRepository`; `get_record` assembles all three into a `MemberRecord`.

pub mod invitation;
pub mod joined;

#[cfg(test)]
mod test;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::member::{LeagueMember, MemberRecord},
};

pub use invitation::InvitationRepository;
pub use joined::JoinedLeagueRepository;

/// Repository for per-guild member records.
pub struct LeagueMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueMemberRepository<'a, C> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the member record of a user in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(LeagueMember))` - The user has a record in the guild
    /// - `Ok(None)` - The user has never been registered in the guild
    /// - `Err(AppError)` - Database error or malformed stored row
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<LeagueMember>, AppError> {
        let entity = entity::prelude::LeagueMember::find()
            .filter(entity::league_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::league_member::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(LeagueMember::from_entity).transpose()
    }

    /// Gets the member record of a user, creating an empty one if none exists.
    ///
    /// Member records are shared by every league in the guild, so the per-league lock
    /// does not cover them. The insert ignores a conflict on (guild_id, user_id) and
    /// the record is read back, so concurrent callers all get the same row.
    ///
    /// # Returns
    /// - `Ok(LeagueMember)` - The existing or newly created record
    /// - `Err(AppError)` - Database error during query or insert
    pub async fn get_or_create(&self, guild_id: u64, user_id: u64) -> Result<LeagueMember, AppError> {
        if let Some(member) = self.find(guild_id, user_id).await? {
            return Ok(member);
        }

        entity::prelude::LeagueMember::insert(entity::league_member::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::league_member::Column::GuildId,
                entity::league_member::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(guild_id, user_id).await?.ok_or_else(|| {
            AppError::InternalError(format!(
                "Member record for user {} in guild {} missing after insert",
                user_id, guild_id
            ))
        })
    }

    /// Gets the member record along with its pending invitations and joined leagues.
    ///
    /// # Returns
    /// - `Ok(Some(MemberRecord))` - The full record
    /// - `Ok(None)` - The user has no record in the guild
    /// - `Err(AppError)` - Database error or malformed stored row
    pub async fn get_record(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberRecord>, AppError> {
        let Some(member) = self.find(guild_id, user_id).await? else {
            return Ok(None);
        };

        let invitations = InvitationRepository::new(self.db)
            .get_league_names(member.id)
            .await?;
        let joined_leagues = JoinedLeagueRepository::new(self.db)
            .get_league_names(member.id)
            .await?;

        Ok(Some(MemberRecord {
            member,
            invitations,
            joined_leagues,
        }))
    }
}
