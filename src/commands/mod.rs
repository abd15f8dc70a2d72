//! Command implementations for the fantasy football pipeline

pub mod common;
pub mod setup;
pub mod tables;
pub mod update_all;
pub mod update_player_game_stats;
pub mod update_player_seasons;
pub mod update_players;
pub mod update_schedules;

pub use common::CommandContext;

#[cfg(test)]
mod tests;
