//! Member record factory for creating test league members.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::league_member::LeagueMemberFactory;
///
/// let member = LeagueMemberFactory::new(&db)
///     .guild_id(&league.guild_id)
///     .user_id("42")
///     .build()
///     .await?;
/// ```
pub struct LeagueMemberFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
}

impl<'a> LeagueMemberFactory<'a> {
    /// Creates a new LeagueMemberFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - user_id: `"{id + 2000}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            user_id: (id + 2000).to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the Discord user ID.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Builds and inserts the member record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::league_member::Model)` - Created member record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::league_member::Model, DbErr> {
        entity::league_member::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member record in the given guild with a generated user ID.
pub async fn create_member(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::league_member::Model, DbErr> {
    LeagueMemberFactory::new(db).guild_id(guild_id).build().await
}
