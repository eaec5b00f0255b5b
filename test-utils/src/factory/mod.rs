//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating league entities with sensible
//! defaults, reducing boilerplate in tests. Each factory inserts a single row; the
//! `helpers` module wires rows together for common scenarios.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let league = factory::create_league(&db).await?;
//!     let member = factory::create_member(&db, &league.guild_id).await?;
//!
//!     // Create a league whose owner is fully set up
//!     let (league, owner) = factory::helpers::create_league_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let league = factory::league::LeagueFactory::new(&db)
//!     .guild_id("987654321")
//!     .name("Chess")
//!     .owner_id("42")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod league;
pub mod league_member;

pub use league::create_league;
pub use league_member::create_member;
