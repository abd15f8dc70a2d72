//! End-to-end pipeline runs against local nflverse files and in-memory SQLite

use std::path::Path;

use fantasy_football::{
    commands::{
        setup::handle_setup, update_all::handle_update_all,
        update_player_game_stats::load_player_game_stats, CommandContext,
    },
    nflverse::LocalDirSource,
    warehouse::{Select, SqliteWarehouse, Warehouse},
    Season, Table,
};
use serde_json::json;

const GAMES: &str = "\
game_id,season,game_type,week,gameday,weekday,gametime,away_team,away_score,home_team,home_score,div_game,roof,surface,stadium_id,stadium
2023_01_DET_KC,2023,REG,1,2023-09-07,Thursday,20:20,DET,21,KC,20,0,outdoors,grass,KAN00,GEHA Field at Arrowhead Stadium
2023_01_CAR_ATL,2023,REG,1,2023-09-10,Sunday,13:00,CAR,10,ATL,24,1,closed,fieldturf,ATL97,Mercedes-Benz Stadium
";

const PLAYERS: &str = "\
gsis_id,first_name,last_name,position,latest_team,status,birth_date,height,weight,college_name,entry_year,draft_number
00-0033873,Patrick,Mahomes,QB,KC,ACT,1995-09-17,74,225,Texas Tech,2017,10
00-0036223,Jahmyr,Gibbs,RB,DET,ACT,2002-03-20,69,200,Alabama,2023,12
00-0039165,Bijan,Robinson,RB,ATL,ACT,2002-01-30,71,215,Texas,2023,8
00-0033303,Harrison,Butker,K,KC,ACT,1995-07-14,76,196,Georgia Tech,2017,233
00-0010000,Old,Timer,QB,,RET,,,,,,
";

const WEEKLY: &str = "\
player_id,player_name,position,recent_team,season,week,completions,attempts,passing_yards,passing_tds,interceptions,carries,rushing_yards,targets,receptions,receiving_yards,fg_att,fg_made,pat_att,pat_made
00-0033873,P.Mahomes,QB,KC,2023,1,21,39,226,2,1,6,45,0,0,0,0,0,0,0
00-0036223,J.Gibbs,RB,DET,2023,1,0,0,0,0,0,9,42,2,2,18,0,0,0,0
00-0039165,B.Robinson,RB,ATL,2023,1,0,0,0,0,0,10,56,6,4,19,0,0,0,0
00-0033303,H.Butker,K,KC,2023,1,0,0,0,0,0,0,0,0,0,0,5,5,5,5
00-0099999,X.Nobody,WR,KC,2023,1,0,0,0,0,0,0,0,3,1,9,0,0,0,0
";

const PLAYS: &str = "\
game_id,season,week,posteam,field_goal_attempt,field_goal_result,extra_point_attempt,extra_point_result,kicker_player_id,kicker_player_name
2023_01_DET_KC,2023,1,KC,1,made,0,,00-0033303,H.Butker
2023_01_DET_KC,2023,1,KC,1,missed,0,,00-0033303,H.Butker
2023_01_DET_KC,2023,1,KC,0,,1,good,00-0033303,H.Butker
2023_01_DET_KC,2023,1,DET,0,,0,,,
";

fn write_release_files(dir: &Path, with_plays: bool) {
    std::fs::write(dir.join("games.csv"), GAMES).unwrap();
    std::fs::write(dir.join("players.csv"), PLAYERS).unwrap();
    std::fs::write(dir.join("player_stats_2023.csv"), WEEKLY).unwrap();
    if with_plays {
        std::fs::write(dir.join("play_by_play_2023.csv"), PLAYS).unwrap();
    }
}

async fn loaded_context(dir: &Path) -> CommandContext {
    let ctx = CommandContext::from_parts(
        Box::new(SqliteWarehouse::open_in_memory().unwrap()),
        Box::new(LocalDirSource::new(dir)),
    );
    handle_setup(&ctx).await.unwrap();
    handle_update_all(&ctx, Some(vec![Season::new(2023)]))
        .await
        .unwrap();
    ctx
}

async fn stat_rows(ctx: &CommandContext) -> Vec<serde_json::Map<String, serde_json::Value>> {
    let query = Select::from(
        Table::PlayerGameStats,
        &[
            "stat_id",
            "team_id",
            "starter_flag",
            "field_goals_attempted",
            "field_goals_made",
            "extra_points_made",
        ],
    )
    .order_by(&["stat_id"]);
    ctx.warehouse().select(&query).await.unwrap()
}

#[tokio::test]
async fn test_update_all_loads_every_table() {
    let dir = tempfile::tempdir().unwrap();
    write_release_files(dir.path(), true);
    let ctx = loaded_context(dir.path()).await;
    let warehouse = ctx.warehouse();

    assert_eq!(warehouse.count_rows(Table::Games).await.unwrap(), 2);
    assert_eq!(warehouse.count_rows(Table::Stadiums).await.unwrap(), 2);
    assert_eq!(warehouse.count_rows(Table::Teams).await.unwrap(), 4);
    assert_eq!(warehouse.count_rows(Table::Players).await.unwrap(), 4);
    assert_eq!(warehouse.count_rows(Table::PlayerSeasons).await.unwrap(), 4);
    assert_eq!(warehouse.count_rows(Table::PlayerGameStats).await.unwrap(), 4);
}

#[tokio::test]
async fn test_stat_rows_matched_to_games() {
    let dir = tempfile::tempdir().unwrap();
    write_release_files(dir.path(), true);
    let ctx = loaded_context(dir.path()).await;

    let rows = stat_rows(&ctx).await;
    let ids: Vec<_> = rows.iter().map(|r| r["stat_id"].clone()).collect();
    assert_eq!(
        ids,
        vec![
            json!("00-0033303_2023_01_DET_KC"),
            json!("00-0033873_2023_01_DET_KC"),
            json!("00-0036223_2023_01_DET_KC"),
            json!("00-0039165_2023_01_CAR_ATL"),
        ]
    );
    assert!(rows.iter().all(|r| r["starter_flag"] == json!(true)));
    assert_eq!(rows[2]["team_id"], json!("DET"));
}

#[tokio::test]
async fn test_play_by_play_kicking_replaces_weekly_kicking() {
    let dir = tempfile::tempdir().unwrap();
    write_release_files(dir.path(), true);
    let ctx = loaded_context(dir.path()).await;

    let kicker = &stat_rows(&ctx).await[0];
    assert_eq!(kicker["field_goals_attempted"], json!(2));
    assert_eq!(kicker["field_goals_made"], json!(1));
    assert_eq!(kicker["extra_points_made"], json!(1));
}

#[tokio::test]
async fn test_weekly_kicking_kept_without_play_by_play() {
    let dir = tempfile::tempdir().unwrap();
    write_release_files(dir.path(), false);
    let ctx = loaded_context(dir.path()).await;

    let kicker = &stat_rows(&ctx).await[0];
    assert_eq!(kicker["field_goals_attempted"], json!(5));
    assert_eq!(kicker["field_goals_made"], json!(5));
}

#[tokio::test]
async fn test_reload_replaces_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_release_files(dir.path(), true);
    let ctx = loaded_context(dir.path()).await;

    let loaded = load_player_game_stats(&ctx, None).await.unwrap();
    assert_eq!(loaded, 4);
    assert_eq!(
        ctx.warehouse()
            .count_rows(Table::PlayerGameStats)
            .await
            .unwrap(),
        4
    );
}
