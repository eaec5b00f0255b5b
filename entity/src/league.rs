use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    pub owner_id: String,
    /// JSON object, stored as text.
    #[sea_orm(column_type = "Text")]
    pub jobs: String,
    /// JSON array, stored as text.
    #[sea_orm(column_type = "Text")]
    pub latest: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::league_leaderboard::Entity")]
    LeagueLeaderboard,
    #[sea_orm(has_many = "super::league_invitation::Entity")]
    LeagueInvitation,
    #[sea_orm(has_many = "super::league_joined::Entity")]
    LeagueJoined,
}

impl Related<super::league_leaderboard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueLeaderboard.def()
    }
}

impl Related<super::league_invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueInvitation.def()
    }
}

impl Related<super::league_joined::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueJoined.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
