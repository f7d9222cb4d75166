use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_team_table::Team, m20260105_000003_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Waiver::Table)
                    .if_not_exists()
                    .col(pk_auto(Waiver::Id))
                    .col(integer(Waiver::PlayerId))
                    .col(integer(Waiver::WaivingTeamId))
                    .col(timestamp(Waiver::WaivedAt))
                    .col(timestamp(Waiver::ClaimDeadline))
                    .col(string(Waiver::Status).default("pending"))
                    .col(integer_null(Waiver::ClaimedByTeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiver_player_id")
                            .from(Waiver::Table, Waiver::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiver_waiving_team_id")
                            .from(Waiver::Table, Waiver::WaivingTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiver_claimed_by_team_id")
                            .from(Waiver::Table, Waiver::ClaimedByTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Waiver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Waiver {
    Table,
    Id,
    PlayerId,
    WaivingTeamId,
    WaivedAt,
    ClaimDeadline,
    Status,
    ClaimedByTeamId,
}
