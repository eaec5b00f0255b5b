//! League factory for creating test league entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leagues with customizable fields.
///
/// Only the league row is inserted. Leaderboard entries and member records are
/// created through `helpers`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::league::LeagueFactory;
///
/// let league = LeagueFactory::new(&db)
///     .guild_id("987654321")
///     .name("Chess")
///     .build()
///     .await?;
/// ```
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    owner_id: String,
}

impl<'a> LeagueFactory<'a> {
    /// Creates a new LeagueFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - name: `"League {id}"`
    /// - owner_id: `"{id + 1000}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("League {}", id),
            owner_id: (id + 1000).to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the league name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owner's Discord user ID.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Builds and inserts the league entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::league::Model)` - Created league entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            jobs: ActiveValue::Set("{}".to_string()),
            latest: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a league with default values.
///
/// Shorthand for `LeagueFactory::new(db).build().await`.
pub async fn create_league(db: &DatabaseConnection) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db).build().await
}
