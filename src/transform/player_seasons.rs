use rayon::prelude::*;

use crate::{
    core::time::BatchTimestamp,
    models::{PlayerSeasonRow, PlayerSeasonSummary},
};

pub fn transform_player_seasons(
    summaries: &[PlayerSeasonSummary],
    stamp: &BatchTimestamp,
) -> Vec<PlayerSeasonRow> {
    summaries
        .par_iter()
        .map(|s| PlayerSeasonRow {
            player_season_id: format!("{}_{}", s.player_id, s.season),
            player_id: s.player_id.clone(),
            season_year: i64::from(s.season.as_u16()),
            team_id: Some(s.team.clone()),
            team_abbr: Some(s.team.clone()),
            primary_position: s.primary_position.clone(),
            created_at: stamp.as_str().to_string(),
            updated_at: stamp.as_str().to_string(),
        })
        .collect()
}
