use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_team_table::Team,
    m20260105_000003_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerBid::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerBid::Id))
                    .col(integer(PlayerBid::PlayerId))
                    .col(string(PlayerBid::UserId))
                    .col(integer(PlayerBid::TeamId))
                    .col(big_integer(PlayerBid::BidAmount))
                    .col(string(PlayerBid::Status).default("active"))
                    .col(boolean(PlayerBid::Finalized).default(false))
                    .col(timestamp(PlayerBid::BidExpires))
                    .col(
                        timestamp(PlayerBid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_bid_player_id")
                            .from(PlayerBid::Table, PlayerBid::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_bid_team_id")
                            .from(PlayerBid::Table, PlayerBid::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_bid_user_id")
                            .from(PlayerBid::Table, PlayerBid::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_bid_player_finalized")
                    .table(PlayerBid::Table)
                    .col(PlayerBid::PlayerId)
                    .col(PlayerBid::Finalized)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerBid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerBid {
    Table,
    Id,
    PlayerId,
    UserId,
    TeamId,
    BidAmount,
    Status,
    Finalized,
    BidExpires,
    CreatedAt,
}
