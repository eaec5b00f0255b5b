//! League data repository for database operations.
//!
//! Provides the `LeagueRepository` for league rows and the `LeaderboardRepository` for
//! the per-league score entries. League lookups are always scoped to a guild.

pub mod leaderboard;

#[cfg(test)]
mod test;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::league::{CreateLeagueParam, League},
};

pub use leaderboard::LeaderboardRepository;

/// Repository providing database operations for league rows.
pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    /// Creates a new LeagueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `LeagueRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new league.
    ///
    /// Inserts the league row with empty `jobs` and `latest`. The owner's leaderboard
    /// entry is created separately through `LeaderboardRepository`.
    ///
    /// # Arguments
    /// - `param` - Guild, name and owner of the new league
    ///
    /// # Returns
    /// - `Ok(League)` - The created league with generated ID
    /// - `Err(AppError::DbErr)` - Database error during insert, including a unique
    ///   constraint violation on (guild_id, name)
    pub async fn create(&self, param: CreateLeagueParam) -> Result<League, AppError> {
        let entity = entity::league::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(param.owner_id.to_string()),
            jobs: ActiveValue::Set("{}".to_string()),
            latest: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        League::from_entity(entity)
    }

    /// Finds a league by its name within a guild.
    ///
    /// Names are matched exactly, including case.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `name` - League name
    ///
    /// # Returns
    /// - `Ok(Some(League))` - The league exists in the guild
    /// - `Ok(None)` - No league with that name in the guild
    /// - `Err(AppError)` - Database error or malformed stored row
    pub async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<League>, AppError> {
        let entity = entity::prelude::League::find()
            .filter(entity::league::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::league::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(League::from_entity).transpose()
    }

    /// Checks whether a league with the given name exists in a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - A league with that name exists
    /// - `Ok(false)` - No such league
    /// - `Err(DbErr)` - Database error during count
    pub async fn exists(&self, guild_id: u64, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::League::find()
            .filter(entity::league::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::league::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
