use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaiverPriority::Table)
                    .if_not_exists()
                    .col(integer(WaiverPriority::TeamId).primary_key())
                    .col(integer(WaiverPriority::PriorityOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiver_priority_team_id")
                            .from(WaiverPriority::Table, WaiverPriority::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaiverPriority::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WaiverPriority {
    Table,
    TeamId,
    PriorityOrder,
}
