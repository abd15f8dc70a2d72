//! Player team and position per season, derived from weekly statistics.

use std::collections::{BTreeMap, HashSet};

use crate::{
    cli::types::Season,
    models::PlayerSeasonSummary,
    nflverse::{NflDataSource, NflDataSourceExt, RawWeeklyStat},
    warehouse::{reads, Warehouse},
    Result,
};

use super::resolve_seasons;

pub async fn collect_player_seasons(
    warehouse: &dyn Warehouse,
    source: &dyn NflDataSource,
    seasons: Option<Vec<Season>>,
) -> Result<Vec<PlayerSeasonSummary>> {
    let seasons = resolve_seasons(warehouse, seasons).await?;
    if seasons.is_empty() {
        return Ok(Vec::new());
    }
    let player_ids = reads::existing_player_ids(warehouse).await?;

    let mut summaries = Vec::new();
    for season in seasons {
        match source.weekly_stats(season).await {
            Ok(stats) => {
                let season_rows = summarize_season(season, &stats, &player_ids);
                tracing::info!("{} player seasons for {}", season_rows.len(), season);
                summaries.extend(season_rows);
            }
            Err(e) => tracing::warn!("Skipping player seasons for {}: {}", season, e),
        }
    }
    Ok(summaries)
}

#[derive(Default)]
struct TeamStint {
    appearances: usize,
    positions: BTreeMap<String, usize>,
}

/// Most frequent key; ties go to the alphabetically first.
fn most_frequent<'a, I>(counts: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a String, usize)>,
{
    let mut best: Option<(&str, usize)> = None;
    // Keys arrive sorted, so only a strictly larger count displaces the leader
    for (key, count) in counts {
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((key.as_str(), count));
        }
    }
    best.map(|(key, _)| key)
}

/// One summary per existing player: the team with the most weekly
/// appearances and the most frequent position played for it.
pub fn summarize_season(
    season: Season,
    stats: &[RawWeeklyStat],
    player_ids: &HashSet<String>,
) -> Vec<PlayerSeasonSummary> {
    let mut stints: BTreeMap<&str, BTreeMap<&str, TeamStint>> = BTreeMap::new();

    for record in stats {
        let (Some(player_id), Some(team)) = (record.player_id.as_deref(), record.team_abbreviation()) else {
            continue;
        };
        if !player_ids.contains(player_id) {
            continue;
        }

        let stint = stints.entry(player_id).or_default().entry(team).or_default();
        stint.appearances += 1;
        if let Some(position) = record.position.as_deref() {
            *stint.positions.entry(position.to_string()).or_default() += 1;
        }
    }

    stints
        .into_iter()
        .filter_map(|(player_id, teams)| {
            let mut best: Option<(&str, &TeamStint)> = None;
            for (team, stint) in &teams {
                if best.map_or(true, |(_, b)| stint.appearances > b.appearances) {
                    best = Some((*team, stint));
                }
            }
            let (team, stint) = best?;

            Some(PlayerSeasonSummary {
                player_id: player_id.to_string(),
                season,
                team: team.to_string(),
                primary_position: most_frequent(stint.positions.iter().map(|(k, v)| (k, *v)))
                    .map(str::to_string),
            })
        })
        .collect()
}
