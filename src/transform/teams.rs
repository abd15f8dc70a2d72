use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::{common::clean, team_directory};
use crate::{core::time::BatchTimestamp, models::TeamRow, nflverse::RawGame};

/// Distinct teams of the schedule: home teams in order of appearance, then away teams.
///
/// A team's stadium is the one of its first home game.
pub fn transform_teams(games: &[RawGame], stamp: &BatchTimestamp) -> Vec<TeamRow> {
    let mut seen = HashSet::new();
    let mut abbreviations = Vec::new();
    let home = games.iter().filter_map(|g| clean(g.home_team.as_deref()));
    let away = games.iter().filter_map(|g| clean(g.away_team.as_deref()));
    for abbr in home.chain(away) {
        if seen.insert(abbr.clone()) {
            abbreviations.push(abbr);
        }
    }

    let mut home_stadiums: HashMap<String, Option<String>> = HashMap::new();
    for game in games {
        if let Some(team) = clean(game.home_team.as_deref()) {
            home_stadiums
                .entry(team)
                .or_insert_with(|| clean(game.stadium_id.as_deref()));
        }
    }

    let rows: Vec<TeamRow> = abbreviations
        .par_iter()
        .map(|abbr| {
            let franchise = team_directory::lookup(abbr);
            TeamRow {
                team_id: abbr.clone(),
                team_name: franchise.map(|f| f.name.to_string()),
                team_city: franchise.map(|f| f.city.to_string()),
                team_abbreviation: abbr.clone(),
                conference: franchise.map(|f| f.conference.to_string()),
                division: franchise.map(|f| f.division.to_string()),
                stadium_id: home_stadiums.get(abbr).cloned().flatten(),
                created_at: stamp.as_str().to_string(),
                updated_at: stamp.as_str().to_string(),
            }
        })
        .collect();

    tracing::info!("Transformed {} teams", rows.len());
    rows
}
