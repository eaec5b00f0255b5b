use chrono::Utc;
use serenity::all::CreateEmbed;

use crate::{bot::reply, error::AppError, service::timezone::TimezoneResolver};

/// Resolves a city and renders its timezone with the current local time.
pub async fn execute(resolver: &TimezoneResolver, city: &str) -> Result<CreateEmbed, AppError> {
    let timezone = resolver.resolve(city).await?;

    Ok(reply::timezone(city, &timezone, Utc::now()))
}
