//! Refresh every table in dependency order.
//!
//! Games come first so the season defaults of the later steps see the
//! freshly loaded schedule; PlayerSeasons precedes PlayerGameStats, which is
//! validated against it.

use super::{
    common::CommandContext, update_player_game_stats::load_player_game_stats,
    update_player_seasons::load_player_seasons, update_players::load_players,
    update_schedules::load_schedules,
};
use crate::{cli::types::Season, Result};

pub async fn handle_update_all(ctx: &CommandContext, seasons: Option<Vec<Season>>) -> Result<()> {
    tracing::info!("Updating all tables");

    let schedule = load_schedules(ctx, seasons.clone()).await?;
    println!(
        "✓ Loaded {} games, {} stadiums, {} teams",
        schedule.games, schedule.stadiums, schedule.teams
    );

    let players = load_players(ctx).await?;
    println!("✓ Loaded {} players", players);

    let player_seasons = load_player_seasons(ctx, seasons.clone()).await?;
    println!("✓ Loaded {} player seasons", player_seasons);

    let stats = load_player_game_stats(ctx, seasons).await?;
    println!("✓ Loaded {} player game stats", stats);

    Ok(())
}
