use super::common::CommandContext;
use crate::{
    cli::types::Table,
    collect::collect_players,
    core::time::BatchTimestamp,
    transform::transform_players,
    warehouse::maintenance::refresh_table,
    Result,
};

/// Reload `Players` with every active player. Returns the rows stored.
pub async fn load_players(ctx: &CommandContext) -> Result<usize> {
    let players = collect_players(ctx.source()).await?;
    let rows = transform_players(&players, &BatchTimestamp::now());
    refresh_table(ctx.warehouse(), Table::Players, &rows).await
}

pub async fn handle_update_players(ctx: &CommandContext) -> Result<()> {
    let loaded = load_players(ctx).await?;
    println!("✓ Loaded {} players", loaded);
    Ok(())
}
