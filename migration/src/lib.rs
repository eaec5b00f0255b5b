pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_league_table;
mod m20261001_000002_create_league_leaderboard_table;
mod m20261001_000003_create_league_member_table;
mod m20261001_000004_create_league_invitation_table;
mod m20261001_000005_create_league_joined_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_league_table::Migration),
            Box::new(m20261001_000002_create_league_leaderboard_table::Migration),
            Box::new(m20261001_000003_create_league_member_table::Migration),
            Box::new(m20261001_000004_create_league_invitation_table::Migration),
            Box::new(m20261001_000005_create_league_joined_table::Migration),
        ]
    }
}
