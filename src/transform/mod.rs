//! Shaping of collected nflverse records into warehouse rows.
//!
//! Every row of one load carries the same `created_at` / `updated_at`
//! [`BatchTimestamp`](crate::core::time::BatchTimestamp). Row mapping runs on
//! rayon's pool; output order follows input order.

mod common;
pub mod games;
pub mod player_game_stats;
pub mod player_seasons;
pub mod players;
pub mod stadiums;
pub mod team_directory;
pub mod teams;

pub use games::transform_games;
pub use player_game_stats::transform_player_game_stats;
pub use player_seasons::transform_player_seasons;
pub use players::transform_players;
pub use stadiums::transform_stadiums;
pub use teams::transform_teams;
