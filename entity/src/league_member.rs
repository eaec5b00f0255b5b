use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::league_invitation::Entity")]
    LeagueInvitation,
    #[sea_orm(has_many = "super::league_joined::Entity")]
    LeagueJoined,
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
