use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "waiver")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub waiving_team_id: i32,
    pub waived_at: DateTimeUtc,
    pub claim_deadline: DateTimeUtc,
    /// One of `pending`, `claimed`, `cleared`.
    pub status: String,
    pub claimed_by_team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::WaivingTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WaivingTeam,
    #[sea_orm(has_many = "super::waiver_claim::Entity")]
    WaiverClaim,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::waiver_claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WaiverClaim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
