use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_team_table::Team, m20260105_000005_create_waiver_table::Waiver,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaiverClaim::Table)
                    .if_not_exists()
                    .col(pk_auto(WaiverClaim::Id))
                    .col(integer(WaiverClaim::WaiverId))
                    .col(integer(WaiverClaim::TeamId))
                    .col(
                        timestamp(WaiverClaim::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiver_claim_waiver_id")
                            .from(WaiverClaim::Table, WaiverClaim::WaiverId)
                            .to(Waiver::Table, Waiver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiver_claim_team_id")
                            .from(WaiverClaim::Table, WaiverClaim::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_waiver_claim_waiver_team")
                    .table(WaiverClaim::Table)
                    .col(WaiverClaim::WaiverId)
                    .col(WaiverClaim::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaiverClaim::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WaiverClaim {
    Table,
    Id,
    WaiverId,
    TeamId,
    CreatedAt,
}
