//! Warehouse row models.
//!
//! Field order and names follow the table schemas; rows are serialized to JSON
//! objects for upload.

use serde::{Deserialize, Serialize};

use crate::cli::types::{Season, Week};

/// Row of the `Players` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub player_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team_id: Option<String>,
    pub team_abbr: Option<String>,
    pub birth_date: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub college: Option<String>,
    pub draft_year: Option<i64>,
    pub draft_position: Option<i64>,
    pub active_status: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Row of the `Games` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRow {
    pub game_id: String,
    pub season_year: Option<i64>,
    pub week_number: Option<i64>,
    pub home_team_id: Option<String>,
    pub home_team_abbr: Option<String>,
    pub away_team_id: Option<String>,
    pub away_team_abbr: Option<String>,
    pub game_date: Option<String>,
    pub game_time: Option<String>,
    pub stadium_id: Option<String>,
    pub primetime_flag: bool,
    pub divisional_matchup_flag: bool,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub home_qb_id: Option<String>,
    pub away_qb_id: Option<String>,
    pub home_moneyline: Option<f64>,
    pub away_moneyline: Option<f64>,
    pub spread_line: Option<f64>,
    pub home_spread_odds: Option<f64>,
    pub away_spread_odds: Option<f64>,
    pub total_line: Option<f64>,
    pub over_odds: Option<f64>,
    pub under_odds: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Row of the `Stadiums` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumRow {
    pub stadium_id: String,
    pub stadium_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub dome_flag: bool,
    pub surface_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Row of the `Teams` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub team_id: String,
    pub team_name: Option<String>,
    pub team_city: Option<String>,
    pub team_abbreviation: String,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub stadium_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Row of the `PlayerGameStats` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStatRow {
    pub stat_id: String,
    pub player_id: String,
    pub game_id: String,
    pub team_id: Option<String>,
    pub position_played: Option<String>,
    pub snaps_played: Option<i64>,
    pub starter_flag: bool,

    pub passing_attempts: i64,
    pub passing_completions: i64,
    pub passing_yards: i64,
    pub passing_tds: i64,
    pub passing_ints: i64,

    pub rushing_attempts: i64,
    pub rushing_yards: i64,
    pub rushing_tds: i64,

    pub receiving_targets: i64,
    pub receptions: i64,
    pub receiving_yards: i64,
    pub receiving_tds: i64,

    pub fumbles: i64,
    pub fumbles_lost: i64,

    pub field_goals_attempted: i64,
    pub field_goals_made: i64,
    pub extra_points_attempted: i64,
    pub extra_points_made: i64,

    pub defensive_sacks: f64,
    pub defensive_tackles: i64,
    pub defensive_interceptions: i64,
    pub defensive_fumbles_recovered: i64,
    pub defensive_tds: i64,

    pub punt_returns: i64,
    pub punt_return_yards: i64,
    pub punt_return_tds: i64,
    pub kick_returns: i64,
    pub kick_return_yards: i64,
    pub kick_return_tds: i64,

    pub created_at: String,
    pub updated_at: String,
}

/// Row of the `PlayerSeasons` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonRow {
    pub player_season_id: String,
    pub player_id: String,
    pub season_year: i64,
    pub team_id: Option<String>,
    pub team_abbr: Option<String>,
    pub primary_position: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// The identifying facts of a scheduled game, used to attach stat lines to games.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameRef {
    pub game_id: String,
    pub season: Season,
    pub week: Week,
    pub home_team: String,
    pub away_team: String,
}

impl GameRef {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// A player's team and primary position for one season, before shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSeasonSummary {
    pub player_id: String,
    pub season: Season,
    pub team: String,
    pub primary_position: Option<String>,
}
