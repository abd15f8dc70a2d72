//! Raw records as published in the nflverse CSV releases.
//!
//! Every column is optional: nflverse writes `NA` or leaves cells empty for
//! missing values, and the column set has changed between release layouts.
//! Unknown columns are ignored. Where a column was renamed, both spellings are
//! kept as separate fields and resolved by the accessor methods.

use serde::Deserialize;

/// Row of `players/players.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub gsis_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub current_team_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub team_abbr: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latest_team: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub college_name: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub status_short_description: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub entry_year: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub draft_year: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub draft_number: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub draft_pick: Option<f64>,
}

impl RawPlayer {
    /// Active roster status in either release layout.
    pub fn is_active(&self) -> bool {
        self.status_short_description.as_deref() == Some("Active")
            || self.status.as_deref() == Some("ACT")
    }

    pub fn team_abbreviation(&self) -> Option<&str> {
        self.team_abbr.as_deref().or(self.latest_team.as_deref())
    }

    pub fn entry_year(&self) -> Option<i64> {
        self.entry_year.or(self.draft_year).map(|v| v as i64)
    }

    pub fn draft_position(&self) -> Option<i64> {
        self.draft_number.or(self.draft_pick).map(|v| v as i64)
    }
}

/// Row of the schedule file (`games.csv`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGame {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub game_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub season: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub week: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub gameday: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub weekday: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub gametime: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_score: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_score: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_moneyline: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_moneyline: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub spread_line: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_spread_odds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_spread_odds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub total_line: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub under_odds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub over_odds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub div_game: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub roof: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub surface: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_qb_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_qb_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub stadium_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub stadium: Option<String>,
}

/// Row of `player_stats/player_stats_{season}.csv` (one player, one week).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawWeeklyStat {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub player_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub player_name: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub recent_team: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub season: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub week: Option<u16>,

    // Passing
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub completions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub attempts: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub passing_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub passing_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub interceptions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub passing_interceptions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub sack_fumbles: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub sack_fumbles_lost: Option<f64>,

    // Rushing
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub carries: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rushing_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rushing_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rushing_fumbles: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rushing_fumbles_lost: Option<f64>,

    // Receiving
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub receptions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub targets: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub receiving_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub receiving_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub receiving_fumbles: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub receiving_fumbles_lost: Option<f64>,

    // Snap counts (not present in every release)
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub offense_snaps: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub defense_snaps: Option<f64>,

    // Kicking
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub fg_att: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub fg_made: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub pat_att: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub pat_made: Option<f64>,

    // Defense
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub def_sacks: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub def_tackles_solo: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub def_tackle_assists: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub def_interceptions: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub def_fumbles_recovered: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub def_tds: Option<f64>,

    // Returns
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub punt_returns: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub punt_return_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub punt_return_tds: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub kickoff_returns: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub kickoff_return_yards: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub kickoff_return_tds: Option<f64>,
}

impl RawWeeklyStat {
    /// Team the player was on that week, in either release layout.
    pub fn team_abbreviation(&self) -> Option<&str> {
        self.recent_team.as_deref().or(self.team.as_deref())
    }

    pub fn interceptions_thrown(&self) -> Option<f64> {
        self.interceptions.or(self.passing_interceptions)
    }
}

/// Row of `pbp/play_by_play_{season}.csv.gz`, restricted to kicking columns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlay {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub game_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub season: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub week: Option<u16>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub posteam: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub field_goal_attempt: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub field_goal_result: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub extra_point_attempt: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub extra_point_result: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub kicker_player_id: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub kicker_player_name: Option<String>,
}

impl RawPlay {
    pub fn is_field_goal(&self) -> bool {
        self.field_goal_attempt == Some(1.0)
    }

    pub fn is_extra_point(&self) -> bool {
        self.extra_point_attempt == Some(1.0)
    }

    pub fn is_kick(&self) -> bool {
        self.is_field_goal() || self.is_extra_point()
    }
}
