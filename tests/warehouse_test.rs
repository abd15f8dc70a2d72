//! Warehouse behaviour through the public API

use fantasy_football::{
    core::time::BatchTimestamp,
    models::TeamRow,
    schema::TableSchema,
    warehouse::{
        maintenance::{ensure_table, refresh_table},
        reads::existing_player_ids,
        SqliteWarehouse, Warehouse,
    },
    PipelineError, Table,
};

fn team(abbr: &str, stamp: &BatchTimestamp) -> TeamRow {
    TeamRow {
        team_id: abbr.to_string(),
        team_name: None,
        team_city: None,
        team_abbreviation: abbr.to_string(),
        conference: None,
        division: None,
        stadium_id: None,
        created_at: stamp.as_str().to_string(),
        updated_at: stamp.as_str().to_string(),
    }
}

#[tokio::test]
async fn test_sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("warehouse.db");
    let stamp = BatchTimestamp::now();

    {
        let warehouse = SqliteWarehouse::open(&path).unwrap();
        ensure_table(&warehouse, &TableSchema::for_table(Table::Teams))
            .await
            .unwrap();
        refresh_table(&warehouse, Table::Teams, &[team("KC", &stamp), team("DET", &stamp)])
            .await
            .unwrap();
    }

    let reopened = SqliteWarehouse::open(&path).unwrap();
    assert!(reopened.table_exists(Table::Teams).await.unwrap());
    assert_eq!(reopened.count_rows(Table::Teams).await.unwrap(), 2);
}

#[tokio::test]
async fn test_every_schema_creates_in_sqlite() {
    let warehouse = SqliteWarehouse::open_in_memory().unwrap();
    for schema in TableSchema::all() {
        assert!(ensure_table(&warehouse, &schema).await.unwrap());
    }
    assert!(existing_player_ids(&warehouse).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reads_before_setup_fail() {
    let warehouse = SqliteWarehouse::open_in_memory().unwrap();
    assert!(matches!(
        existing_player_ids(&warehouse).await,
        Err(PipelineError::Sqlite(_))
    ));
}
