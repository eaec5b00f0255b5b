//! Per-league mutation locks.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

type LeagueKey = (u64, String);

/// Registry of async mutexes keyed by (guild, league name).
///
/// Mutating league operations hold the guard for their whole read-check-write
/// sequence, so two commands touching the same league never interleave. Commands on
/// different leagues run in parallel. Entries nobody holds or waits on are pruned on
/// the next `lock` call.
#[derive(Clone, Default)]
pub struct LeagueLocks {
    inner: Arc<Mutex<HashMap<LeagueKey, Arc<Mutex<()>>>>>,
}

impl LeagueLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a league.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `name` - League name, matched exactly
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Access is held until the guard is dropped
    pub async fn lock(&self, guild_id: u64, name: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry((guild_id, name.to_string()))
                .or_default()
                .clone()
        };

        lock.lock_owned().await
    }

    /// Number of leagues currently tracked by the registry.
    #[cfg(test)]
    pub async fn tracked(&self) -> usize {
        self.inner.lock().await.len()
    }
}
