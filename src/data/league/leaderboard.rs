use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::league::LeaderboardEntry};

/// Repository for the member -> score entries of a league.
pub struct LeaderboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeaderboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a member to a league's leaderboard with the given score.
    ///
    /// # Returns
    /// - `Ok(LeaderboardEntry)` - The inserted entry
    /// - `Err(AppError::DbErr)` - Database error, including the member already being on
    ///   the leaderboard
    pub async fn add(
        &self,
        league_id: i32,
        user_id: u64,
        score: i32,
    ) -> Result<LeaderboardEntry, AppError> {
        let entity = entity::league_leaderboard::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            score: ActiveValue::Set(score),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LeaderboardEntry::from_entity(entity)
    }

    /// Gets the leaderboard of a league, highest score first.
    ///
    /// Ties are ordered by user ID so the output is stable. Sorting happens after
    /// parsing because user IDs are stored as strings.
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - All entries of the league (empty if none)
    /// - `Err(AppError)` - Database error or malformed stored user ID
    pub async fn get_by_league(&self, league_id: i32) -> Result<Vec<LeaderboardEntry>, AppError> {
        let entities = entity::prelude::LeagueLeaderboard::find()
            .filter(entity::league_leaderboard::Column::LeagueId.eq(league_id))
            .all(self.db)
            .await?;

        let mut entries = entities
            .into_iter()
            .map(LeaderboardEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));

        Ok(entries)
    }

    /// Removes a member from a league's leaderboard.
    ///
    /// # Returns
    /// - `Ok(true)` - The entry existed and was deleted
    /// - `Ok(false)` - The member was not on the leaderboard
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, league_id: i32, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::LeagueLeaderboard::delete_many()
            .filter(entity::league_leaderboard::Column::LeagueId.eq(league_id))
            .filter(entity::league_leaderboard::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
