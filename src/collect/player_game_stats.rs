//! Weekly player statistics matched to loaded games.

use std::collections::{HashMap, HashSet};

use crate::{
    cli::types::{Position, Season, Week},
    models::GameRef,
    nflverse::{NflDataSource, NflDataSourceExt, RawPlay, RawWeeklyStat},
    warehouse::{reads, Warehouse},
    Result,
};

use super::resolve_seasons;

/// One player's statistics for one game, before shaping into a warehouse row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub player_id: String,
    pub position: String,
    pub team: Option<String>,
    pub season: Season,
    pub week: Week,
    pub game_id: Option<String>,
    pub stats: RawWeeklyStat,
}

impl StatLine {
    /// A weekly record with the identifying columns present.
    pub fn from_weekly(stats: RawWeeklyStat) -> Option<Self> {
        Some(Self {
            player_id: stats.player_id.clone()?,
            position: stats.position.clone()?,
            team: stats.team_abbreviation().map(str::to_string),
            season: Season::new(stats.season?),
            week: Week::new(stats.week?),
            game_id: None,
            stats,
        })
    }
}

/// Collected lines plus the games they were matched against.
#[derive(Debug, Default)]
pub struct StatCollection {
    pub lines: Vec<StatLine>,
    pub games: Vec<GameRef>,
}

/// Games grouped by `(season, week)` in schedule order.
pub type GamesByWeek<'a> = HashMap<(Season, Week), Vec<&'a GameRef>>;

pub fn games_by_week(games: &[GameRef]) -> GamesByWeek<'_> {
    let mut by_week: GamesByWeek<'_> = HashMap::new();
    for game in games {
        by_week.entry((game.season, game.week)).or_default().push(game);
    }
    by_week
}

/// First game of `(season, week)` that `team` played in.
pub fn find_game<'a>(by_week: &GamesByWeek<'a>, season: Season, week: Week, team: &str) -> Option<&'a GameRef> {
    by_week
        .get(&(season, week))?
        .iter()
        .copied()
        .find(|game| game.involves(team))
}

pub async fn collect_player_game_stats(
    warehouse: &dyn Warehouse,
    source: &dyn NflDataSource,
    seasons: Option<Vec<Season>>,
) -> Result<StatCollection> {
    let player_ids = reads::existing_player_ids(warehouse).await?;
    let game_ids = reads::existing_game_ids(warehouse).await?;

    let seasons = resolve_seasons(warehouse, seasons).await?;
    if seasons.is_empty() {
        return Ok(StatCollection::default());
    }

    let mut weekly = Vec::new();
    for season in &seasons {
        match source.weekly_stats(*season).await {
            Ok(stats) => {
                tracing::info!("Retrieved {} weekly records for {}", stats.len(), season);
                weekly.extend(stats);
            }
            Err(e) => tracing::warn!("Skipping weekly stats for {}: {}", season, e),
        }
    }
    if weekly.is_empty() {
        tracing::error!("Failed to retrieve any weekly data");
        return Ok(StatCollection::default());
    }
    tracing::info!("Collected {} weekly records", weekly.len());

    let mut lines = fantasy_lines(weekly, &player_ids);
    tracing::info!("{} records for fantasy positions and existing players", lines.len());

    let games = reads::game_refs(warehouse, &seasons).await?;
    let matched = match_games(&mut lines, &games);
    tracing::info!("Matched {} records to games", matched);

    let mut kicking = Vec::new();
    for season in &seasons {
        match source.kicking_plays(*season).await {
            Ok(plays) => {
                tracing::info!("Found {} kicking plays for {}", plays.len(), season);
                kicking.extend(kicking_lines(&plays, &games));
            }
            Err(e) => tracing::warn!("Skipping kicking data for {}: {}", season, e),
        }
    }
    let lines = merge_kicking(lines, kicking, &player_ids, &game_ids);

    Ok(StatCollection {
        lines: keep_known_games(lines, &game_ids),
        games,
    })
}

/// Lines of fantasy positions belonging to players already in the warehouse.
pub fn fantasy_lines(weekly: Vec<RawWeeklyStat>, player_ids: &HashSet<String>) -> Vec<StatLine> {
    weekly
        .into_iter()
        .filter_map(StatLine::from_weekly)
        .filter(|line| Position::is_fantasy_relevant(&line.position))
        .filter(|line| player_ids.contains(&line.player_id))
        .collect()
}

/// Attach a game id to every line whose team played that week. Returns the match count.
pub fn match_games(lines: &mut [StatLine], games: &[GameRef]) -> usize {
    let by_week = games_by_week(games);
    let mut matched = 0;
    for line in lines.iter_mut() {
        let Some(team) = line.team.as_deref() else {
            continue;
        };
        if let Some(game) = find_game(&by_week, line.season, line.week, team) {
            line.game_id = Some(game.game_id.clone());
            matched += 1;
        }
    }
    matched
}

#[derive(Default)]
struct KickTally {
    player_name: Option<String>,
    team: Option<String>,
    season: Option<u16>,
    week: Option<u16>,
    fg_att: u32,
    fg_made: u32,
    pat_att: u32,
    pat_made: u32,
}

/// Per-game kicking lines from field goal and extra point plays.
pub fn kicking_lines(plays: &[RawPlay], games: &[GameRef]) -> Vec<StatLine> {
    let games: HashMap<&str, &GameRef> = games.iter().map(|g| (g.game_id.as_str(), g)).collect();

    let mut order: Vec<(String, String)> = Vec::new();
    let mut tallies: HashMap<(String, String), KickTally> = HashMap::new();

    for play in plays.iter().filter(|p| p.is_kick()) {
        let (Some(game_id), Some(kicker)) = (play.game_id.as_ref(), play.kicker_player_id.as_ref()) else {
            continue;
        };

        let key = (game_id.clone(), kicker.clone());
        let tally = tallies.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            KickTally {
                player_name: play.kicker_player_name.clone(),
                team: play.posteam.clone(),
                season: play.season,
                week: play.week,
                ..Default::default()
            }
        });

        if play.is_field_goal() {
            tally.fg_att += 1;
            if play.field_goal_result.as_deref() == Some("made") {
                tally.fg_made += 1;
            }
        }
        if play.is_extra_point() {
            tally.pat_att += 1;
            if play.extra_point_result.as_deref() == Some("good") {
                tally.pat_made += 1;
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| {
            let tally = tallies.remove(&key)?;
            let (game_id, player_id) = key;
            let game = games.get(game_id.as_str());
            let season = tally.season.or(game.map(|g| g.season.as_u16()))?;
            let week = tally.week.or(game.map(|g| g.week.as_u16()))?;

            let stats = RawWeeklyStat {
                player_id: Some(player_id.clone()),
                player_name: tally.player_name,
                position: Some(Position::K.to_string()),
                recent_team: tally.team.clone(),
                season: Some(season),
                week: Some(week),
                fg_att: Some(f64::from(tally.fg_att)),
                fg_made: Some(f64::from(tally.fg_made)),
                pat_att: Some(f64::from(tally.pat_att)),
                pat_made: Some(f64::from(tally.pat_made)),
                ..Default::default()
            };

            Some(StatLine {
                player_id,
                position: Position::K.to_string(),
                team: tally.team,
                season: Season::new(season),
                week: Week::new(week),
                game_id: Some(game_id),
                stats,
            })
        })
        .collect()
}

/// Replace weekly kicker lines with play-by-play kicking lines when any survive filtering.
pub fn merge_kicking(
    lines: Vec<StatLine>,
    kicking: Vec<StatLine>,
    player_ids: &HashSet<String>,
    game_ids: &HashSet<String>,
) -> Vec<StatLine> {
    let kicking: Vec<StatLine> = kicking
        .into_iter()
        .filter(|line| player_ids.contains(&line.player_id))
        .filter(|line| line.game_id.as_ref().is_some_and(|id| game_ids.contains(id)))
        .collect();

    if kicking.is_empty() {
        return lines;
    }
    tracing::info!("Replacing weekly kicker records with {} play-by-play records", kicking.len());

    let kicker = Position::K.as_str();
    lines
        .into_iter()
        .filter(|line| line.position != kicker)
        .chain(kicking)
        .collect()
}

/// Drop lines without a game id, then lines whose game is not loaded.
pub fn keep_known_games(lines: Vec<StatLine>, game_ids: &HashSet<String>) -> Vec<StatLine> {
    let missing = lines.iter().filter(|line| line.game_id.is_none()).count();
    if missing > 0 {
        tracing::warn!("{} records have no matching game and were removed", missing);
    }

    let kept: Vec<StatLine> = lines
        .into_iter()
        .filter(|line| line.game_id.as_ref().is_some_and(|id| game_ids.contains(id)))
        .collect();
    tracing::info!("{} records remain after filtering for existing games", kept.len());
    kept
}

#[cfg(test)]
mod tests;
