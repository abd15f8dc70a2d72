//! `PlayerGameStats` rows from matched stat lines.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::common::{count, total};
use crate::{
    cli::types::{Position, Season},
    collect::{
        player_game_stats::{find_game, games_by_week},
        StatLine,
    },
    core::time::BatchTimestamp,
    models::{GameRef, PlayerGameStatRow},
};

/// Player team per `(player_id, season)`, as loaded into `PlayerSeasons`.
pub type PlayerTeams = HashMap<(String, Season), String>;

/// Outcome counts of checking lines against `PlayerSeasons`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub invalid: usize,
    pub corrected: usize,
    pub dropped: usize,
}

/// Re-match lines whose game does not involve the player's season team.
///
/// Lines for players or games without reference data pass unchanged. An
/// invalid line is moved to the game its season team played that week, or
/// dropped when there is none.
pub fn validate_against_player_seasons(
    lines: Vec<StatLine>,
    games: &[GameRef],
    player_teams: &PlayerTeams,
) -> (Vec<StatLine>, ValidationReport) {
    let by_id: HashMap<&str, &GameRef> = games.iter().map(|g| (g.game_id.as_str(), g)).collect();
    let by_week = games_by_week(games);
    let mut report = ValidationReport::default();

    let validated = lines
        .into_iter()
        .filter_map(|mut line| {
            let Some(game) = line.game_id.as_deref().and_then(|id| by_id.get(id)) else {
                return Some(line);
            };
            let Some(team) = player_teams.get(&(line.player_id.clone(), game.season)) else {
                return Some(line);
            };
            if game.involves(team) {
                return Some(line);
            }

            report.invalid += 1;
            match find_game(&by_week, game.season, game.week, team) {
                Some(correct) => {
                    report.corrected += 1;
                    line.game_id = Some(correct.game_id.clone());
                    line.team = Some(team.clone());
                    Some(line)
                }
                None => {
                    report.dropped += 1;
                    None
                }
            }
        })
        .collect();

    (validated, report)
}

/// Whether the line reflects a starting role, judged by usage for the position.
pub fn is_starter(line: &StatLine) -> bool {
    let s = &line.stats;
    match line.position.parse::<Position>() {
        Ok(Position::QB) => count(s.attempts) >= 10,
        Ok(Position::RB) => count(s.carries) >= 8,
        Ok(Position::WR) | Ok(Position::TE) => count(s.targets) >= 4,
        Ok(Position::K) => count(s.fg_att) > 0,
        Err(_) => false,
    }
}

fn to_row(line: &StatLine, game_id: &str, stamp: &BatchTimestamp) -> PlayerGameStatRow {
    let s = &line.stats;
    let snaps_played = match (s.offense_snaps, s.defense_snaps) {
        (None, None) => None,
        (offense, defense) => Some(total(&[offense, defense])),
    };

    PlayerGameStatRow {
        stat_id: format!("{}_{}", line.player_id, game_id),
        player_id: line.player_id.clone(),
        game_id: game_id.to_string(),
        team_id: line.team.clone(),
        position_played: Some(line.position.clone()),
        snaps_played,
        starter_flag: is_starter(line),

        passing_attempts: count(s.attempts),
        passing_completions: count(s.completions),
        passing_yards: count(s.passing_yards),
        passing_tds: count(s.passing_tds),
        passing_ints: count(s.interceptions_thrown()),

        rushing_attempts: count(s.carries),
        rushing_yards: count(s.rushing_yards),
        rushing_tds: count(s.rushing_tds),

        receiving_targets: count(s.targets),
        receptions: count(s.receptions),
        receiving_yards: count(s.receiving_yards),
        receiving_tds: count(s.receiving_tds),

        fumbles: total(&[s.sack_fumbles, s.rushing_fumbles, s.receiving_fumbles]),
        fumbles_lost: total(&[
            s.sack_fumbles_lost,
            s.rushing_fumbles_lost,
            s.receiving_fumbles_lost,
        ]),

        field_goals_attempted: count(s.fg_att),
        field_goals_made: count(s.fg_made),
        extra_points_attempted: count(s.pat_att),
        extra_points_made: count(s.pat_made),

        defensive_sacks: s.def_sacks.filter(|v| v.is_finite()).unwrap_or(0.0),
        defensive_tackles: total(&[s.def_tackles_solo, s.def_tackle_assists]),
        defensive_interceptions: count(s.def_interceptions),
        defensive_fumbles_recovered: count(s.def_fumbles_recovered),
        defensive_tds: count(s.def_tds),

        punt_returns: count(s.punt_returns),
        punt_return_yards: count(s.punt_return_yards),
        punt_return_tds: count(s.punt_return_tds),
        kick_returns: count(s.kickoff_returns),
        kick_return_yards: count(s.kickoff_return_yards),
        kick_return_tds: count(s.kickoff_return_tds),

        created_at: stamp.as_str().to_string(),
        updated_at: stamp.as_str().to_string(),
    }
}

pub fn transform_player_game_stats(
    lines: Vec<StatLine>,
    games: &[GameRef],
    player_teams: &PlayerTeams,
    stamp: &BatchTimestamp,
) -> Vec<PlayerGameStatRow> {
    let before = lines.len();
    let lines: Vec<StatLine> = lines
        .into_iter()
        .filter(|line| !line.player_id.is_empty() && line.game_id.is_some())
        .collect();
    if lines.len() < before {
        tracing::warn!("Dropped {} rows with missing player_id or game_id", before - lines.len());
    }

    let (lines, report) = validate_against_player_seasons(lines, games, player_teams);
    if report.invalid > 0 {
        tracing::warn!(
            "Found {} records whose game does not involve the player's team: {} corrected, {} dropped",
            report.invalid,
            report.corrected,
            report.dropped
        );
    }

    let rows: Vec<PlayerGameStatRow> = lines
        .par_iter()
        .filter_map(|line| Some(to_row(line, line.game_id.as_deref()?, stamp)))
        .collect();

    let mut seen = HashSet::new();
    let total_rows = rows.len();
    let rows: Vec<PlayerGameStatRow> = rows
        .into_iter()
        .filter(|row| seen.insert(row.stat_id.clone()))
        .collect();
    if rows.len() < total_rows {
        tracing::warn!("Removed {} duplicate stat records", total_rows - rows.len());
    }

    tracing::info!("Transformed {} player game stats", rows.len());
    rows
}
