use rayon::prelude::*;

use super::common::{clean, date, int};
use crate::{core::time::BatchTimestamp, models::GameRow, nflverse::RawGame};

const PRIMETIME_DAYS: [&str; 2] = ["THURSDAY", "MONDAY"];
const PRIMETIME_KICKOFFS: [&str; 2] = ["19:", "20:"];

/// Thursday and Monday games, and evening kickoffs on any day.
pub fn is_primetime(weekday: Option<&str>, gametime: Option<&str>) -> bool {
    let on_primetime_day = weekday
        .map(|day| PRIMETIME_DAYS.contains(&day.trim().to_uppercase().as_str()))
        .unwrap_or(false);
    let evening_kickoff = gametime
        .map(|time| PRIMETIME_KICKOFFS.iter().any(|p| time.trim().starts_with(p)))
        .unwrap_or(false);
    on_primetime_day || evening_kickoff
}

pub fn transform_games(games: &[RawGame], stamp: &BatchTimestamp) -> Vec<GameRow> {
    let rows: Vec<GameRow> = games
        .par_iter()
        .filter_map(|g| {
            let home = clean(g.home_team.as_deref());
            let away = clean(g.away_team.as_deref());

            Some(GameRow {
                game_id: clean(g.game_id.as_deref())?,
                season_year: g.season.map(i64::from),
                week_number: g.week.map(i64::from),
                home_team_id: home.clone(),
                home_team_abbr: home,
                away_team_id: away.clone(),
                away_team_abbr: away,
                game_date: date(g.gameday.as_deref()),
                game_time: clean(g.gametime.as_deref()),
                stadium_id: clean(g.stadium_id.as_deref()).or_else(|| clean(g.stadium.as_deref())),
                primetime_flag: is_primetime(g.weekday.as_deref(), g.gametime.as_deref()),
                divisional_matchup_flag: g.div_game == Some(1.0),
                home_score: int(g.home_score),
                away_score: int(g.away_score),
                home_qb_id: clean(g.home_qb_id.as_deref()),
                away_qb_id: clean(g.away_qb_id.as_deref()),
                home_moneyline: g.home_moneyline,
                away_moneyline: g.away_moneyline,
                spread_line: g.spread_line,
                home_spread_odds: g.home_spread_odds,
                away_spread_odds: g.away_spread_odds,
                total_line: g.total_line,
                over_odds: g.over_odds,
                under_odds: g.under_odds,
                created_at: stamp.as_str().to_string(),
                updated_at: stamp.as_str().to_string(),
            })
        })
        .collect();

    tracing::info!("Transformed {} games", rows.len());
    rows
}
