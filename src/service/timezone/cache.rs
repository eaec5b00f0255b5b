//! In-memory memo of resolved timezones.
//!
//! Entries are keyed by the case-folded city name and expire after a fixed TTL. Expired
//! entries are dropped lazily when they are looked up again.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::model::timezone::TimezoneName;

/// A resolved timezone together with the instant it stops being served.
#[derive(Clone)]
struct CachedTimezone {
    timezone: TimezoneName,
    expires_at: Instant,
}

impl CachedTimezone {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Shared TTL cache of city name -> timezone.
///
/// Cloning shares the underlying map. A zero TTL disables caching entirely.
#[derive(Clone)]
pub struct TimezoneCache {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<String, CachedTimezone>>>,
}

impl TimezoneCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets the cached timezone for a city, if it was stored within the TTL.
    ///
    /// # Arguments
    /// - `city` - City name as typed; compared case-insensitively
    ///
    /// # Returns
    /// - `Some(TimezoneName)` - Fresh cached answer
    /// - `None` - Never cached or expired
    pub async fn get(&self, city: &str) -> Option<TimezoneName> {
        let key = cache_key(city);

        {
            let entries = self.entries.read().await;
            match entries.get(&key) {
                Some(entry) if !entry.is_expired() => return Some(entry.timezone.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired; drop it unless another task refreshed it in between
        let mut entries = self.entries.write().await;
        if entries.get(&key).is_some_and(CachedTimezone::is_expired) {
            entries.remove(&key);
        }

        None
    }

    /// Stores the timezone for a city.
    pub async fn insert(&self, city: &str, timezone: TimezoneName) {
        if self.ttl.is_zero() {
            return;
        }

        let entry = CachedTimezone {
            timezone,
            expires_at: Instant::now() + self.ttl,
        };

        self.entries.write().await.insert(cache_key(city), entry);
    }

    /// Number of entries currently held, expired ones included.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

fn cache_key(city: &str) -> String {
    city.trim().to_lowercase()
}
