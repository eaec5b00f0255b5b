//! League operations.
//!
//! `LeagueService` implements the league commands on top of the repositories. Every
//! mutating operation holds the league's lock from `LeagueLocks` for its whole
//! check-then-write sequence, and every write touching more than one row runs inside
//! a single database transaction.

pub mod lock;

#[cfg(test)]
mod test;

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    data::{
        league::{LeaderboardRepository, LeagueRepository},
        member::{InvitationRepository, JoinedLeagueRepository, LeagueMemberRepository},
    },
    error::{league::LeagueError, AppError},
    model::{
        league::{CreateLeagueParam, InviteOutcome, League, LeagueSummary, RemoveOutcome},
        member::LeagueMember,
    },
};

pub use lock::LeagueLocks;

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a LeagueLocks,
}

impl<'a> LeagueService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a LeagueLocks) -> Self {
        Self { db, locks }
    }

    /// Gets a league and its leaderboard.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `name` - League name
    ///
    /// # Returns
    /// - `Ok(LeagueSummary)` - The league with its leaderboard, highest score first
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that name
    /// - `Err(AppError)` - Database error
    pub async fn info(&self, guild_id: u64, name: &str) -> Result<LeagueSummary, AppError> {
        let name = normalize_name(name)?;
        let league = self.require_league(guild_id, &name).await?;

        let leaderboard = LeaderboardRepository::new(self.db)
            .get_by_league(league.id)
            .await?;

        Ok(LeagueSummary {
            league,
            leaderboard,
        })
    }

    /// Creates a league owned by `owner_id`.
    ///
    /// The owner becomes the only leaderboard entry with a score of 0 and the league is
    /// recorded in the owner's joined leagues. All rows are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(League)` - The created league
    /// - `Err(AppError::LeagueErr(DuplicateLeague))` - The name is taken in this guild
    /// - `Err(AppError::LeagueErr(InvalidName))` - The name is empty
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        guild_id: u64,
        name: &str,
        owner_id: u64,
    ) -> Result<League, AppError> {
        let name = normalize_name(name)?;
        let _guard = self.locks.lock(guild_id, &name).await;

        if LeagueRepository::new(self.db).exists(guild_id, &name).await? {
            return Err(LeagueError::DuplicateLeague(name).into());
        }

        let txn = self.db.begin().await?;

        let league = LeagueRepository::new(&txn)
            .create(CreateLeagueParam {
                guild_id,
                name: name.clone(),
                owner_id,
            })
            .await
            .map_err(|err| duplicate_league_on_conflict(err, &name))?;

        LeaderboardRepository::new(&txn)
            .add(league.id, owner_id, 0)
            .await?;
        let owner = LeagueMemberRepository::new(&txn)
            .get_or_create(guild_id, owner_id)
            .await?;
        JoinedLeagueRepository::new(&txn)
            .create(owner.id, league.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "League {} created in guild {} by {}",
            league.name,
            guild_id,
            owner_id
        );

        Ok(league)
    }

    /// Invites members to a league.
    ///
    /// Creates a member record for anyone who does not have one yet, then records a
    /// pending invitation. Members who are already invited or have already joined are
    /// skipped, as are repeated IDs in `members`.
    ///
    /// # Returns
    /// - `Ok(InviteOutcome)` - Which members were invited and which were skipped
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that name; nothing
    ///   was written
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn invite(
        &self,
        guild_id: u64,
        name: &str,
        members: &[u64],
    ) -> Result<InviteOutcome, AppError> {
        let name = normalize_name(name)?;
        let _guard = self.locks.lock(guild_id, &name).await;
        let league = self.require_league(guild_id, &name).await?;

        let mut seen = HashSet::new();
        let mut outcome = InviteOutcome::default();

        let txn = self.db.begin().await?;
        let member_repo = LeagueMemberRepository::new(&txn);
        let invitation_repo = InvitationRepository::new(&txn);
        let joined_repo = JoinedLeagueRepository::new(&txn);

        for &user_id in members.iter().filter(|id| seen.insert(**id)) {
            let member = member_repo.get_or_create(guild_id, user_id).await?;

            if invitation_repo.exists(member.id, league.id).await?
                || joined_repo.exists(member.id, league.id).await?
            {
                outcome.skipped.push(user_id);
                continue;
            }

            invitation_repo.create(member.id, league.id).await?;
            outcome.invited.push(user_id);
        }

        txn.commit().await?;

        tracing::info!(
            "Invited {} member(s) to league {} in guild {} ({} skipped)",
            outcome.invited.len(),
            name,
            guild_id,
            outcome.skipped.len()
        );

        Ok(outcome)
    }

    /// Removes a member from a league on behalf of `requester_id`.
    ///
    /// The leaderboard entry and the joined-league row are deleted in one transaction.
    ///
    /// # Returns
    /// - `Ok(RemoveOutcome::Removed)` - The member was removed
    /// - `Ok(RemoveOutcome::NotOwner)` - The requester does not own the league; nothing
    ///   was changed
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that name
    /// - `Err(AppError::LeagueErr(CannotRemoveOwner))` - The member is the owner
    /// - `Err(AppError::LeagueErr(MemberNotRegistered))` - The member has no record
    /// - `Err(AppError::LeagueErr(MemberNotInLeague))` - The member has not joined
    /// - `Err(AppError)` - Database error
    pub async fn remove(
        &self,
        guild_id: u64,
        name: &str,
        member_id: u64,
        requester_id: u64,
    ) -> Result<RemoveOutcome, AppError> {
        let name = normalize_name(name)?;
        let _guard = self.locks.lock(guild_id, &name).await;
        let league = self.require_league(guild_id, &name).await?;

        if requester_id != league.owner_id {
            return Ok(RemoveOutcome::NotOwner {
                owner_id: league.owner_id,
            });
        }

        if member_id == league.owner_id {
            return Err(LeagueError::CannotRemoveOwner(name).into());
        }

        let record = LeagueMemberRepository::new(self.db)
            .get_record(guild_id, member_id)
            .await?
            .ok_or(LeagueError::MemberNotRegistered(member_id))?;

        if !record.has_joined(&league.name) {
            return Err(LeagueError::MemberNotInLeague {
                member: member_id,
                league: name,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        LeaderboardRepository::new(&txn)
            .remove(league.id, member_id)
            .await?;
        JoinedLeagueRepository::new(&txn)
            .delete(record.member.id, league.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Member {} removed from league {} in guild {}",
            member_id,
            name,
            guild_id
        );

        Ok(RemoveOutcome::Removed)
    }

    /// Accepts a pending invitation.
    ///
    /// Deletes the invitation, records the joined league, and adds the member to the
    /// leaderboard with a score of 0, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(League)` - The league that was joined
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that name
    /// - `Err(AppError::LeagueErr(MemberNotRegistered))` - The member has no record
    /// - `Err(AppError::LeagueErr(InvitationNotFound))` - No pending invitation
    /// - `Err(AppError)` - Database error
    pub async fn accept(
        &self,
        guild_id: u64,
        name: &str,
        member_id: u64,
    ) -> Result<League, AppError> {
        let name = normalize_name(name)?;
        let _guard = self.locks.lock(guild_id, &name).await;
        let league = self.require_league(guild_id, &name).await?;
        let member = self.require_member(guild_id, member_id).await?;

        let txn = self.db.begin().await?;

        if !InvitationRepository::new(&txn)
            .delete(member.id, league.id)
            .await?
        {
            return Err(LeagueError::InvitationNotFound {
                member: member_id,
                league: name,
            }
            .into());
        }

        JoinedLeagueRepository::new(&txn)
            .create(member.id, league.id)
            .await?;
        LeaderboardRepository::new(&txn)
            .add(league.id, member_id, 0)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Member {} joined league {} in guild {}",
            member_id,
            name,
            guild_id
        );

        Ok(league)
    }

    /// Declines a pending invitation.
    ///
    /// # Returns
    /// - `Ok(())` - The invitation was deleted
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that name
    /// - `Err(AppError::LeagueErr(MemberNotRegistered))` - The member has no record
    /// - `Err(AppError::LeagueErr(InvitationNotFound))` - No pending invitation
    /// - `Err(AppError)` - Database error
    pub async fn decline(&self, guild_id: u64, name: &str, member_id: u64) -> Result<(), AppError> {
        let name = normalize_name(name)?;
        let _guard = self.locks.lock(guild_id, &name).await;
        let league = self.require_league(guild_id, &name).await?;
        let member = self.require_member(guild_id, member_id).await?;

        if !InvitationRepository::new(self.db)
            .delete(member.id, league.id)
            .await?
        {
            return Err(LeagueError::InvitationNotFound {
                member: member_id,
                league: name,
            }
            .into());
        }

        tracing::debug!(
            "Member {} declined league {} in guild {}",
            member_id,
            name,
            guild_id
        );

        Ok(())
    }

    /// Lists the leagues a member has pending invitations to, oldest first.
    ///
    /// A member without a record simply has no invitations.
    pub async fn invitations(&self, guild_id: u64, member_id: u64) -> Result<Vec<String>, AppError> {
        let record = LeagueMemberRepository::new(self.db)
            .get_record(guild_id, member_id)
            .await?;

        Ok(record.map(|record| record.invitations).unwrap_or_default())
    }

    async fn require_league(&self, guild_id: u64, name: &str) -> Result<League, AppError> {
        LeagueRepository::new(self.db)
            .find_by_name(guild_id, name)
            .await?
            .ok_or_else(|| LeagueError::LeagueNotFound(name.to_string()).into())
    }

    async fn require_member(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<LeagueMember, AppError> {
        LeagueMemberRepository::new(self.db)
            .find(guild_id, member_id)
            .await?
            .ok_or_else(|| LeagueError::MemberNotRegistered(member_id).into())
    }
}

/// Trims surrounding whitespace from a league name, rejecting empty names.
fn normalize_name(name: &str) -> Result<String, LeagueError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LeagueError::InvalidName);
    }

    Ok(trimmed.to_string())
}

/// Maps a unique (guild_id, name) violation on insert to `DuplicateLeague`.
///
/// Reached when another process sharing the database creates the league between
/// the existence check and the insert. Other errors pass through unchanged.
fn duplicate_league_on_conflict(err: AppError, name: &str) -> AppError {
    match err {
        AppError::DbErr(ref db_err) if is_unique_violation(db_err) => {
            LeagueError::DuplicateLeague(name.to_string()).into()
        }
        err => err,
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
