use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "waiver_claim")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub waiver_id: i32,
    pub team_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::waiver::Entity",
        from = "Column::WaiverId",
        to = "super::waiver::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Waiver,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::waiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Waiver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
