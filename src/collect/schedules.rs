use crate::{
    cli::types::Season,
    nflverse::{NflDataSource, NflDataSourceExt, RawGame},
    Result,
};

/// Every scheduled game of `seasons`. One collection feeds Games, Stadiums and Teams.
pub async fn collect_schedules(source: &dyn NflDataSource, seasons: &[Season]) -> Result<Vec<RawGame>> {
    tracing::info!("Collecting schedules for seasons {:?}", seasons);
    let games: Vec<RawGame> = source
        .schedules(seasons)
        .await?
        .into_iter()
        .filter(|g| g.game_id.is_some())
        .collect();
    tracing::info!("Collected {} games", games.len());
    Ok(games)
}
