use std::collections::HashSet;

use rayon::prelude::*;

use super::common::clean;
use crate::{core::time::BatchTimestamp, models::StadiumRow, nflverse::RawGame};

const INDOOR_ROOFS: [&str; 4] = ["DOME", "CLOSED", "INDOOR", "RETRACTABLE"];
const DERIVED_ID_LEN: usize = 8;

/// Identifier for a stadium the schedule lists without one.
pub fn derive_stadium_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(DERIVED_ID_LEN)
        .collect()
}

pub fn is_dome(roof: Option<&str>) -> bool {
    roof.map(|r| INDOOR_ROOFS.contains(&r.trim().to_uppercase().as_str()))
        .unwrap_or(false)
}

/// One row per distinct stadium in schedule order.
///
/// Stadiums are keyed by `stadium_id` or, when the schedule has none, by name.
/// Location columns are not published by nflverse and stay null.
pub fn transform_stadiums(games: &[RawGame], stamp: &BatchTimestamp) -> Vec<StadiumRow> {
    let mut seen = HashSet::new();
    let distinct: Vec<&RawGame> = games
        .iter()
        .filter(|g| {
            let key = clean(g.stadium_id.as_deref()).or_else(|| clean(g.stadium.as_deref()));
            key.is_some_and(|k| seen.insert(k))
        })
        .collect();

    let rows: Vec<StadiumRow> = distinct
        .par_iter()
        .filter_map(|g| {
            let name = clean(g.stadium.as_deref());
            let stadium_id = clean(g.stadium_id.as_deref())
                .or_else(|| name.as_deref().map(derive_stadium_id))
                .filter(|id| !id.is_empty())?;

            Some(StadiumRow {
                stadium_id,
                stadium_name: name,
                city: None,
                state: None,
                dome_flag: is_dome(g.roof.as_deref()),
                surface_type: clean(g.surface.as_deref()),
                latitude: None,
                longitude: None,
                created_at: stamp.as_str().to_string(),
                updated_at: stamp.as_str().to_string(),
            })
        })
        .collect();

    tracing::info!("Transformed {} stadiums", rows.len());
    rows
}
