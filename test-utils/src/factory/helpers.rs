//! Shared helper utilities for factory methods.
//!
//! This module provides ID generation and convenience methods for creating
//! league rows together with the rows that reference them.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts a leaderboard entry for a user in a league.
///
/// # Arguments
/// - `db` - Database connection
/// - `league_id` - ID of the league row
/// - `user_id` - Discord user ID as string
/// - `score` - Initial score
///
/// # Returns
/// - `Ok(entity::league_leaderboard::Model)` - Created leaderboard entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_leaderboard_entry(
    db: &DatabaseConnection,
    league_id: i32,
    user_id: &str,
    score: i32,
) -> Result<entity::league_leaderboard::Model, DbErr> {
    entity::league_leaderboard::ActiveModel {
        league_id: ActiveValue::Set(league_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        score: ActiveValue::Set(score),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a pending invitation for a member record.
///
/// # Returns
/// - `Ok(entity::league_invitation::Model)` - Created invitation
/// - `Err(DbErr)` - Database error during insert
pub async fn create_invitation(
    db: &DatabaseConnection,
    member_id: i32,
    league_id: i32,
) -> Result<entity::league_invitation::Model, DbErr> {
    entity::league_invitation::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        league_id: ActiveValue::Set(league_id),
        invited_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a joined-league row for a member record.
///
/// Does not touch the leaderboard; pair with `create_leaderboard_entry` when the
/// test needs a consistent membership.
///
/// # Returns
/// - `Ok(entity::league_joined::Model)` - Created joined-league row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_joined(
    db: &DatabaseConnection,
    member_id: i32,
    league_id: i32,
) -> Result<entity::league_joined::Model, DbErr> {
    entity::league_joined::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        league_id: ActiveValue::Set(league_id),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a league whose owner is registered the same way league creation does it:
/// 1. League
/// 2. Owner leaderboard entry with score 0
/// 3. Owner member record
/// 4. Owner joined-league row
///
/// # Returns
/// - `Ok((league, owner))` - The league and the owner's member record
/// - `Err(DbErr)` - Database error during creation
pub async fn create_league_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::league::Model, entity::league_member::Model), DbErr> {
    let league = crate::factory::league::create_league(db).await?;
    let owner = crate::factory::league_member::LeagueMemberFactory::new(db)
        .guild_id(&league.guild_id)
        .user_id(&league.owner_id)
        .build()
        .await?;

    create_leaderboard_entry(db, league.id, &league.owner_id, 0).await?;
    create_joined(db, owner.id, league.id).await?;

    Ok((league, owner))
}

/// Adds a registered member who has joined the league, with a leaderboard entry.
///
/// # Returns
/// - `Ok(entity::league_member::Model)` - The joined member's record
/// - `Err(DbErr)` - Database error during creation
pub async fn create_joined_member(
    db: &DatabaseConnection,
    league: &entity::league::Model,
    user_id: &str,
) -> Result<entity::league_member::Model, DbErr> {
    let member = crate::factory::league_member::LeagueMemberFactory::new(db)
        .guild_id(&league.guild_id)
        .user_id(user_id)
        .build()
        .await?;

    create_leaderboard_entry(db, league.id, user_id, 0).await?;
    create_joined(db, member.id, league.id).await?;

    Ok(member)
}
