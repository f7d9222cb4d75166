use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub team_id: Option<i32>,
    pub salary: i64,
    /// One of `free_agent`, `signed`, `waived`.
    pub status: String,
    pub manually_removed: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::DiscordId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::player_bid::Entity")]
    PlayerBid,
    #[sea_orm(has_many = "super::waiver::Entity")]
    Waiver,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player_bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerBid.def()
    }
}

impl Related<super::waiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Waiver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
