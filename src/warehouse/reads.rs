//! Typed lookups against already loaded tables.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::{Row, Select, Warehouse};
use crate::{
    cli::types::{Season, Table, Week},
    models::GameRef,
    Result,
};

fn text(row: &Row, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn integer(row: &Row, column: &str) -> Option<i64> {
    match row.get(column)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn season_of(row: &Row, column: &str) -> Option<Season> {
    integer(row, column)
        .and_then(|v| u16::try_from(v).ok())
        .map(Season::new)
}

async fn id_set(warehouse: &dyn Warehouse, table: Table, column: &'static str) -> Result<HashSet<String>> {
    let rows = warehouse.select(&Select::from(table, &[column]).distinct()).await?;
    Ok(rows.iter().filter_map(|row| text(row, column)).collect())
}

/// Every `player_id` in `Players`.
pub async fn existing_player_ids(warehouse: &dyn Warehouse) -> Result<HashSet<String>> {
    let ids = id_set(warehouse, Table::Players, "player_id").await?;
    tracing::info!("Found {} existing players", ids.len());
    Ok(ids)
}

/// Every `game_id` in `Games`.
pub async fn existing_game_ids(warehouse: &dyn Warehouse) -> Result<HashSet<String>> {
    let ids = id_set(warehouse, Table::Games, "game_id").await?;
    tracing::info!("Found {} existing games", ids.len());
    Ok(ids)
}

/// Distinct seasons present in `Games`, ascending.
pub async fn game_seasons(warehouse: &dyn Warehouse) -> Result<Vec<Season>> {
    let query = Select::from(Table::Games, &["season_year"])
        .distinct()
        .order_by(&["season_year"]);
    let rows = warehouse.select(&query).await?;
    Ok(rows.iter().filter_map(|row| season_of(row, "season_year")).collect())
}

/// Games of the given seasons in schedule order.
///
/// Team abbreviations fall back to the team ids when a row predates the
/// abbreviation columns.
pub async fn game_refs(warehouse: &dyn Warehouse, seasons: &[Season]) -> Result<Vec<GameRef>> {
    let query = Select::from(
        Table::Games,
        &[
            "game_id",
            "season_year",
            "week_number",
            "home_team_id",
            "home_team_abbr",
            "away_team_id",
            "away_team_abbr",
        ],
    )
    .filter_in(
        "season_year",
        seasons.iter().map(|s| i64::from(s.as_u16())).collect(),
    )
    .order_by(&["season_year", "week_number", "game_id"]);

    let rows = warehouse.select(&query).await?;
    let refs: Vec<GameRef> = rows
        .iter()
        .filter_map(|row| {
            Some(GameRef {
                game_id: text(row, "game_id")?,
                season: season_of(row, "season_year")?,
                week: integer(row, "week_number")
                    .and_then(|w| u16::try_from(w).ok())
                    .map(Week::new)?,
                home_team: text(row, "home_team_abbr").or_else(|| text(row, "home_team_id"))?,
                away_team: text(row, "away_team_abbr").or_else(|| text(row, "away_team_id"))?,
            })
        })
        .collect();

    tracing::info!("Loaded {} games for matching", refs.len());
    Ok(refs)
}

/// The team each player was assigned to per season in `PlayerSeasons`.
pub async fn player_teams_by_season(
    warehouse: &dyn Warehouse,
    seasons: &[Season],
) -> Result<HashMap<(String, Season), String>> {
    let query = Select::from(
        Table::PlayerSeasons,
        &["player_id", "season_year", "team_abbr", "team_id"],
    )
    .filter_in(
        "season_year",
        seasons.iter().map(|s| i64::from(s.as_u16())).collect(),
    );

    let rows = warehouse.select(&query).await?;
    Ok(rows
        .iter()
        .filter_map(|row| {
            let team = text(row, "team_abbr").or_else(|| text(row, "team_id"))?;
            Some(((text(row, "player_id")?, season_of(row, "season_year")?), team))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::TableSchema, warehouse::SqliteWarehouse};
    use serde_json::json;

    async fn warehouse_with_games() -> SqliteWarehouse {
        let warehouse = SqliteWarehouse::open_in_memory().unwrap();
        for table in [Table::Games, Table::PlayerSeasons] {
            warehouse
                .create_table(&TableSchema::for_table(table))
                .await
                .unwrap();
        }

        let games = vec![
            json!({ "game_id": "2023_01_DET_KC", "season_year": 2023, "week_number": 1,
                    "home_team_id": "KC", "home_team_abbr": "KC",
                    "away_team_id": "DET", "away_team_abbr": "DET" }),
            json!({ "game_id": "2022_02_MIA_NE", "season_year": 2022, "week_number": 2,
                    "home_team_id": "NE", "away_team_id": "MIA" }),
            json!({ "game_id": "2021_01_A_B", "season_year": 2021, "week_number": 1,
                    "home_team_id": "B", "away_team_id": "A" }),
        ];
        warehouse.insert_rows(Table::Games, &games).await.unwrap();

        let seasons = vec![json!({ "player_season_id": "00-1_2023", "player_id": "00-1",
                                   "season_year": 2023, "team_id": "KC", "team_abbr": "KC" })];
        warehouse
            .insert_rows(Table::PlayerSeasons, &seasons)
            .await
            .unwrap();
        warehouse
    }

    #[tokio::test]
    async fn test_game_seasons_ascending() {
        let warehouse = warehouse_with_games().await;
        let seasons = game_seasons(&warehouse).await.unwrap();
        assert_eq!(seasons, vec![Season::new(2021), Season::new(2022), Season::new(2023)]);
    }

    #[tokio::test]
    async fn test_game_refs_filtered_with_id_fallback() {
        let warehouse = warehouse_with_games().await;
        let refs = game_refs(&warehouse, &[Season::new(2022), Season::new(2023)])
            .await
            .unwrap();

        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].game_id, "2022_02_MIA_NE");
        assert_eq!(refs[0].home_team, "NE");
        assert_eq!(refs[0].week, Week::new(2));
        assert!(refs[1].involves("DET"));
    }

    #[tokio::test]
    async fn test_existing_ids_and_player_teams() {
        let warehouse = warehouse_with_games().await;

        let games = existing_game_ids(&warehouse).await.unwrap();
        assert!(games.contains("2021_01_A_B"));
        assert_eq!(games.len(), 3);

        let teams = player_teams_by_season(&warehouse, &[Season::new(2023)])
            .await
            .unwrap();
        assert_eq!(
            teams.get(&("00-1".to_string(), Season::new(2023))).map(String::as_str),
            Some("KC")
        );
    }
}
