pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_team_table;
mod m20260105_000003_create_player_table;
mod m20260105_000004_create_player_bid_table;
mod m20260105_000005_create_waiver_table;
mod m20260105_000006_create_waiver_claim_table;
mod m20260105_000007_create_waiver_priority_table;
mod m20260112_000008_create_league_match_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_team_table::Migration),
            Box::new(m20260105_000003_create_player_table::Migration),
            Box::new(m20260105_000004_create_player_bid_table::Migration),
            Box::new(m20260105_000005_create_waiver_table::Migration),
            Box::new(m20260105_000006_create_waiver_claim_table::Migration),
            Box::new(m20260105_000007_create_waiver_priority_table::Migration),
            Box::new(m20260112_000008_create_league_match_table::Migration),
        ]
    }
}
