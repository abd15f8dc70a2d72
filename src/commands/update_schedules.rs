//! Games, Stadiums and Teams all come from one schedule collection.

use super::common::CommandContext;
use crate::{
    cli::types::{Season, Table},
    collect::collect_schedules,
    core::time::BatchTimestamp,
    transform::{transform_games, transform_stadiums, transform_teams},
    warehouse::maintenance::refresh_table,
    Result,
};

/// Rows stored per table by one schedule load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleLoad {
    pub games: usize,
    pub stadiums: usize,
    pub teams: usize,
}

/// Reload the schedule tables for `seasons`, defaulting to the recent seasons.
pub async fn load_schedules(
    ctx: &CommandContext,
    seasons: Option<Vec<Season>>,
) -> Result<ScheduleLoad> {
    let seasons = seasons.unwrap_or_else(|| Season::recent(Season::current()));
    let games = collect_schedules(ctx.source(), &seasons).await?;

    let stamp = BatchTimestamp::now();
    let game_rows = transform_games(&games, &stamp);
    let stadium_rows = transform_stadiums(&games, &stamp);
    let team_rows = transform_teams(&games, &stamp);

    let warehouse = ctx.warehouse();
    Ok(ScheduleLoad {
        games: refresh_table(warehouse, Table::Games, &game_rows).await?,
        stadiums: refresh_table(warehouse, Table::Stadiums, &stadium_rows).await?,
        teams: refresh_table(warehouse, Table::Teams, &team_rows).await?,
    })
}

pub async fn handle_update_games(ctx: &CommandContext, seasons: Option<Vec<Season>>) -> Result<()> {
    let load = load_schedules(ctx, seasons).await?;
    println!("✓ Loaded {} games", load.games);
    println!("✓ Loaded {} stadiums", load.stadiums);
    println!("✓ Loaded {} teams", load.teams);
    Ok(())
}
