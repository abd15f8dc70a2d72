//! Extraction from nflverse, filtered against what the warehouse already holds.

pub mod player_game_stats;
pub mod player_seasons;
pub mod players;
pub mod schedules;

pub use player_game_stats::{collect_player_game_stats, StatCollection, StatLine};
pub use player_seasons::collect_player_seasons;
pub use players::collect_players;
pub use schedules::collect_schedules;

use crate::{
    cli::types::Season,
    warehouse::{reads::game_seasons, Warehouse},
    Result,
};

/// Requested seasons, or every season already loaded into `Games`.
pub async fn resolve_seasons(
    warehouse: &dyn Warehouse,
    requested: Option<Vec<Season>>,
) -> Result<Vec<Season>> {
    match requested {
        Some(seasons) if !seasons.is_empty() => Ok(seasons),
        _ => {
            let seasons = game_seasons(warehouse).await?;
            if seasons.is_empty() {
                tracing::error!("No seasons requested and none found in the Games table");
            } else {
                tracing::info!("Using seasons from Games: {:?}", seasons);
            }
            Ok(seasons)
        }
    }
}
