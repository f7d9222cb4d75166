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
                    .table(LeagueMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueMatch::Id))
                    .col(integer(LeagueMatch::HomeTeamId))
                    .col(integer(LeagueMatch::AwayTeamId))
                    .col(integer(LeagueMatch::HomeScore))
                    .col(integer(LeagueMatch::AwayScore))
                    .col(timestamp(LeagueMatch::PlayedAt))
                    .col(
                        timestamp(LeagueMatch::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_match_home_team_id")
                            .from(LeagueMatch::Table, LeagueMatch::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_match_away_team_id")
                            .from(LeagueMatch::Table, LeagueMatch::AwayTeamId)
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
            .drop_table(Table::drop().table(LeagueMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueMatch {
    Table,
    Id,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    PlayedAt,
    CreatedAt,
}
