use super::common::CommandContext;
use crate::{
    cli::types::{Season, Table},
    collect::collect_player_seasons,
    core::time::BatchTimestamp,
    transform::transform_player_seasons,
    warehouse::maintenance::refresh_table,
    Result,
};

/// Reload `PlayerSeasons`. Without `seasons`, every season in `Games` is used.
pub async fn load_player_seasons(
    ctx: &CommandContext,
    seasons: Option<Vec<Season>>,
) -> Result<usize> {
    let summaries = collect_player_seasons(ctx.warehouse(), ctx.source(), seasons).await?;
    let rows = transform_player_seasons(&summaries, &BatchTimestamp::now());
    refresh_table(ctx.warehouse(), Table::PlayerSeasons, &rows).await
}

pub async fn handle_update_player_seasons(
    ctx: &CommandContext,
    seasons: Option<Vec<Season>>,
) -> Result<()> {
    let loaded = load_player_seasons(ctx, seasons).await?;
    println!("✓ Loaded {} player seasons", loaded);
    Ok(())
}
