use crate::{
    nflverse::{NflDataSource, NflDataSourceExt, RawPlayer},
    Result,
};

/// Active players from the nflverse player directory.
pub async fn collect_players(source: &dyn NflDataSource) -> Result<Vec<RawPlayer>> {
    tracing::info!("Collecting players from {}", source.describe());
    let all = source.players().await?;
    let total = all.len();

    let active = active_players(all);
    tracing::info!("Kept {} active players of {}", active.len(), total);
    Ok(active)
}

pub fn active_players(players: Vec<RawPlayer>) -> Vec<RawPlayer> {
    players.into_iter().filter(RawPlayer::is_active).collect()
}
