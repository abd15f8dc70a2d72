use rayon::prelude::*;

use super::common::{clean, date};
use crate::{core::time::BatchTimestamp, models::PlayerRow, nflverse::RawPlayer};

/// `Players` rows for every record with a `gsis_id`.
pub fn transform_players(players: &[RawPlayer], stamp: &BatchTimestamp) -> Vec<PlayerRow> {
    let rows: Vec<PlayerRow> = players
        .par_iter()
        .filter_map(|p| {
            Some(PlayerRow {
                player_id: clean(p.gsis_id.as_deref())?,
                first_name: clean(p.first_name.as_deref()),
                last_name: clean(p.last_name.as_deref()),
                position: clean(p.position.as_deref()),
                team_id: clean(p.current_team_id.as_deref()),
                team_abbr: clean(p.team_abbreviation()),
                birth_date: date(p.birth_date.as_deref()),
                height: p.height,
                weight: p.weight,
                college: clean(p.college_name.as_deref()),
                draft_year: p.entry_year(),
                draft_position: p.draft_position(),
                active_status: p.is_active(),
                created_at: stamp.as_str().to_string(),
                updated_at: stamp.as_str().to_string(),
            })
        })
        .collect();

    tracing::info!("Transformed {} players", rows.len());
    rows
}
