use super::common::CommandContext;
use crate::{
    cli::types::{Season, Table},
    collect::collect_player_game_stats,
    core::time::BatchTimestamp,
    transform::{player_game_stats::PlayerTeams, transform_player_game_stats},
    warehouse::{maintenance::refresh_table, reads::player_teams_by_season},
    Result,
};

/// Reload `PlayerGameStats`. Without `seasons`, every season in `Games` is used.
///
/// Lines are checked against `PlayerSeasons` when it can be read; otherwise
/// they are loaded as matched.
pub async fn load_player_game_stats(
    ctx: &CommandContext,
    seasons: Option<Vec<Season>>,
) -> Result<usize> {
    let warehouse = ctx.warehouse();
    let collection = collect_player_game_stats(warehouse, ctx.source(), seasons).await?;

    let seasons: Vec<Season> = {
        let mut seasons: Vec<Season> = collection.lines.iter().map(|l| l.season).collect();
        seasons.sort();
        seasons.dedup();
        seasons
    };
    let player_teams = match player_teams_by_season(warehouse, &seasons).await {
        Ok(teams) => teams,
        Err(e) => {
            tracing::warn!("Could not read PlayerSeasons, skipping validation: {}", e);
            PlayerTeams::new()
        }
    };

    let rows = transform_player_game_stats(
        collection.lines,
        &collection.games,
        &player_teams,
        &BatchTimestamp::now(),
    );
    refresh_table(warehouse, Table::PlayerGameStats, &rows).await
}

pub async fn handle_update_player_game_stats(
    ctx: &CommandContext,
    seasons: Option<Vec<Season>>,
) -> Result<()> {
    let loaded = load_player_game_stats(ctx, seasons).await?;
    println!("✓ Loaded {} player game stats", loaded);
    Ok(())
}
