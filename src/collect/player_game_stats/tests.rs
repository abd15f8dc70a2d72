//! Unit tests for player game stat collection

use super::*;
use crate::{
    cli::types::Table,
    nflverse::LocalDirSource,
    schema::TableSchema,
    warehouse::SqliteWarehouse,
};
use serde_json::json;

fn game(id: &str, season: u16, week: u16, home: &str, away: &str) -> GameRef {
    GameRef {
        game_id: id.to_string(),
        season: Season::new(season),
        week: Week::new(week),
        home_team: home.to_string(),
        away_team: away.to_string(),
    }
}

fn weekly(player: &str, position: &str, team: &str, week: u16) -> RawWeeklyStat {
    RawWeeklyStat {
        player_id: Some(player.to_string()),
        position: Some(position.to_string()),
        recent_team: Some(team.to_string()),
        season: Some(2023),
        week: Some(week),
        ..Default::default()
    }
}

fn kick(game_id: &str, kicker: &str, fg: Option<&str>, pat: Option<&str>) -> RawPlay {
    RawPlay {
        game_id: Some(game_id.to_string()),
        season: Some(2023),
        week: Some(1),
        posteam: Some("KC".to_string()),
        field_goal_attempt: Some(if fg.is_some() { 1.0 } else { 0.0 }),
        field_goal_result: fg.map(str::to_string),
        extra_point_attempt: Some(if pat.is_some() { 1.0 } else { 0.0 }),
        extra_point_result: pat.map(str::to_string),
        kicker_player_id: Some(kicker.to_string()),
        kicker_player_name: Some("H.Butker".to_string()),
    }
}

fn ids(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_fantasy_lines_filters_positions_and_players() {
    let lines = fantasy_lines(
        vec![
            weekly("00-1", "QB", "KC", 1),
            weekly("00-2", "OL", "KC", 1),
            weekly("00-3", "WR", "KC", 1),
            RawWeeklyStat {
                player_id: Some("00-1".to_string()),
                position: Some("QB".to_string()),
                ..Default::default()
            },
        ],
        &ids(&["00-1", "00-2"]),
    );

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].player_id, "00-1");
}

#[test]
fn test_match_games_uses_team_and_week() {
    let games = vec![
        game("2023_01_DET_KC", 2023, 1, "KC", "DET"),
        game("2023_01_ARI_WAS", 2023, 1, "WAS", "ARI"),
        game("2023_02_KC_JAX", 2023, 2, "JAX", "KC"),
    ];
    let mut lines = fantasy_lines(
        vec![
            weekly("00-1", "QB", "KC", 2),
            weekly("00-2", "RB", "ARI", 1),
            weekly("00-3", "WR", "BUF", 1),
        ],
        &ids(&["00-1", "00-2", "00-3"]),
    );

    let matched = match_games(&mut lines, &games);

    assert_eq!(matched, 2);
    assert_eq!(lines[0].game_id.as_deref(), Some("2023_02_KC_JAX"));
    assert_eq!(lines[1].game_id.as_deref(), Some("2023_01_ARI_WAS"));
    assert_eq!(lines[2].game_id, None);
}

#[test]
fn test_kicking_lines_tally_per_game_and_kicker() {
    let plays = vec![
        kick("2023_01_DET_KC", "00-K", Some("made"), None),
        kick("2023_01_DET_KC", "00-K", Some("missed"), None),
        kick("2023_01_DET_KC", "00-K", None, Some("good")),
        kick("2023_01_DET_KC", "00-K", None, Some("failed")),
        RawPlay {
            kicker_player_id: None,
            ..kick("2023_01_DET_KC", "ignored", Some("made"), None)
        },
    ];

    let lines = kicking_lines(&plays, &[]);
    assert_eq!(lines.len(), 1);

    let line = &lines[0];
    assert_eq!(line.player_id, "00-K");
    assert_eq!(line.position, "K");
    assert_eq!(line.team.as_deref(), Some("KC"));
    assert_eq!(line.game_id.as_deref(), Some("2023_01_DET_KC"));
    assert_eq!(line.stats.fg_att, Some(2.0));
    assert_eq!(line.stats.fg_made, Some(1.0));
    assert_eq!(line.stats.pat_att, Some(2.0));
    assert_eq!(line.stats.pat_made, Some(1.0));
}

#[test]
fn test_merge_kicking_replaces_weekly_kickers() {
    let mut weekly_lines = fantasy_lines(
        vec![weekly("00-1", "QB", "KC", 1), weekly("00-K", "K", "KC", 1)],
        &ids(&["00-1", "00-K"]),
    );
    match_games(&mut weekly_lines, &[game("2023_01_DET_KC", 2023, 1, "KC", "DET")]);

    let kicking = kicking_lines(&[kick("2023_01_DET_KC", "00-K", Some("made"), None)], &[]);
    let merged = merge_kicking(
        weekly_lines,
        kicking,
        &ids(&["00-1", "00-K"]),
        &ids(&["2023_01_DET_KC"]),
    );

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].position, "QB");
    assert_eq!(merged[1].stats.fg_made, Some(1.0));
}

#[test]
fn test_merge_kicking_keeps_weekly_when_nothing_survives() {
    let weekly_lines = fantasy_lines(vec![weekly("00-K", "K", "KC", 1)], &ids(&["00-K"]));
    let kicking = kicking_lines(&[kick("2023_01_DET_KC", "00-OTHER", Some("made"), None)], &[]);

    let merged = merge_kicking(weekly_lines, kicking, &ids(&["00-K"]), &ids(&["2023_01_DET_KC"]));
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].player_id, "00-K");
}

#[test]
fn test_keep_known_games() {
    let mut lines = fantasy_lines(
        vec![
            weekly("00-1", "QB", "KC", 1),
            weekly("00-2", "QB", "BUF", 1),
            weekly("00-3", "QB", "NYJ", 1),
        ],
        &ids(&["00-1", "00-2", "00-3"]),
    );
    lines[1].game_id = Some("2023_01_BUF_NYJ".to_string());
    lines[0].game_id = Some("2023_01_DET_KC".to_string());

    let kept = keep_known_games(lines, &ids(&["2023_01_DET_KC"]));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].player_id, "00-1");
}

#[tokio::test]
async fn test_collect_skips_failed_seasons() {
    let warehouse = SqliteWarehouse::open_in_memory().unwrap();
    for table in [Table::Players, Table::Games] {
        warehouse
            .create_table(&TableSchema::for_table(table))
            .await
            .unwrap();
    }
    warehouse
        .insert_rows(Table::Players, &[json!({ "player_id": "00-1" })])
        .await
        .unwrap();
    warehouse
        .insert_rows(
            Table::Games,
            &[json!({ "game_id": "2023_01_DET_KC", "season_year": 2023, "week_number": 1,
                      "home_team_abbr": "KC", "away_team_abbr": "DET" })],
        )
        .await
        .unwrap();

    // 2022 has no file on disk, and 2023 has no play-by-play
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("player_stats_2023.csv"),
        "player_id,position,recent_team,season,week,attempts\n00-1,QB,KC,2023,1,35\n",
    )
    .unwrap();
    let source = LocalDirSource::new(dir.path());

    let collection = collect_player_game_stats(
        &warehouse,
        &source,
        Some(vec![Season::new(2022), Season::new(2023)]),
    )
    .await
    .unwrap();

    assert_eq!(collection.lines.len(), 1);
    assert_eq!(collection.lines[0].game_id.as_deref(), Some("2023_01_DET_KC"));
    assert_eq!(collection.games.len(), 1);
}

#[test]
fn test_merge_kicking_leaves_other_lines_unchanged() {
    let mut weekly_lines = fantasy_lines(
        vec![weekly("00-1", "QB", "KC", 1), weekly("00-K", "K", "KC", 1)],
        &ids(&["00-1", "00-K"]),
    );
    match_games(&mut weekly_lines, &[game("2023_01_DET_KC", 2023, 1, "KC", "DET")]);
    let quarterback = weekly_lines[0].clone();

    let kicking = kicking_lines(&[kick("2023_01_DET_KC", "00-K", Some("made"), None)], &[]);
    let merged = merge_kicking(
        weekly_lines,
        kicking.clone(),
        &ids(&["00-1", "00-K"]),
        &ids(&["2023_01_DET_KC"]),
    );

    assert_eq!(merged, vec![quarterback, kicking[0].clone()]);
}
