//! City name to IANA timezone resolution.
//!
//! `TimezoneResolver` geocodes a city through a `Geocoder`, then maps the coordinates
//! to a timezone with the offline `tzf-rs` index. Transient geocoding failures are
//! retried with a doubling backoff and answers are memoized in a `TimezoneCache`.

pub mod cache;
pub mod geocoder;

#[cfg(test)]
mod test;

use std::sync::Arc;
use std::time::Duration;

use tzf_rs::DefaultFinder;

use crate::{
    error::timezone::TimezoneError,
    model::timezone::{Coordinates, TimezoneName},
};

pub use cache::TimezoneCache;
pub use geocoder::{Geocoder, NominatimGeocoder};

/// How often and how patiently transient geocoding failures are retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempts made after the first one fails.
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each further retry.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

pub struct TimezoneResolver {
    geocoder: Arc<dyn Geocoder>,
    finder: Arc<DefaultFinder>,
    cache: TimezoneCache,
    retry: RetryPolicy,
}

impl TimezoneResolver {
    /// Creates a resolver.
    ///
    /// # Arguments
    /// - `geocoder` - City name to coordinates lookup
    /// - `finder` - Offline coordinate to timezone index
    /// - `cache` - Memo of previous answers
    /// - `retry` - Retry policy for transient geocoding failures
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        finder: Arc<DefaultFinder>,
        cache: TimezoneCache,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            geocoder,
            finder,
            cache,
            retry,
        }
    }

    /// Resolves a city name to its IANA timezone.
    ///
    /// # Arguments
    /// - `city` - City name as typed by the member
    ///
    /// # Returns
    /// - `Ok(TimezoneName)` - Timezone of the first geocoding match
    /// - `Err(TimezoneError::CityNotFound)` - Empty name or no geocoding match
    /// - `Err(TimezoneError::TimezoneNotFound)` - Coordinates outside every timezone
    /// - `Err(TimezoneError)` - Geocoding failed after all retries, or the lookup task failed
    pub async fn resolve(&self, city: &str) -> Result<TimezoneName, TimezoneError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(TimezoneError::CityNotFound(String::new()));
        }

        if let Some(timezone) = self.cache.get(city).await {
            tracing::debug!("Timezone for {} served from cache: {}", city, timezone);
            return Ok(timezone);
        }

        let coordinates = self
            .geocode_with_retry(city)
            .await?
            .ok_or_else(|| TimezoneError::CityNotFound(city.to_string()))?;

        let timezone = self.lookup(coordinates).await?;
        self.cache.insert(city, timezone.clone()).await;

        Ok(timezone)
    }

    async fn geocode_with_retry(&self, city: &str) -> Result<Option<Coordinates>, TimezoneError> {
        let mut delay = self.retry.backoff;
        let mut attempt = 0;

        loop {
            match self.geocoder.search(city).await {
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Geocoding {} failed (attempt {} of {}): {}",
                        city,
                        attempt,
                        self.retry.max_retries + 1,
                        err
                    );
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                }
                result => return result,
            }
        }
    }

    /// Maps coordinates to a timezone on the blocking pool.
    async fn lookup(&self, coordinates: Coordinates) -> Result<TimezoneName, TimezoneError> {
        let finder = self.finder.clone();
        let name = tokio::task::spawn_blocking(move || {
            finder
                .get_tz_name(coordinates.longitude, coordinates.latitude)
                .to_string()
        })
        .await
        .map_err(|err| TimezoneError::Lookup(err.to_string()))?;

        if name.is_empty() {
            return Err(TimezoneError::TimezoneNotFound {
                latitude: coordinates.latitude.to_string(),
                longitude: coordinates.longitude.to_string(),
            });
        }

        Ok(TimezoneName(name))
    }
}
