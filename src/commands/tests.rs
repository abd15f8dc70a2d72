//! Command handler tests against an in-memory SQLite warehouse

use std::path::Path;

use super::{
    setup::handle_setup,
    tables::{handle_count, handle_truncate},
    update_player_game_stats::load_player_game_stats,
    update_players::load_players,
    update_schedules::{load_schedules, ScheduleLoad},
    CommandContext,
};
use crate::{
    cli::types::{Season, Table},
    nflverse::LocalDirSource,
    schema::TableSchema,
    warehouse::{maintenance::ensure_table, SqliteWarehouse, Warehouse},
    PipelineError,
};

const GAMES: &str = "\
game_id,season,game_type,week,gameday,weekday,gametime,away_team,away_score,home_team,home_score,div_game,roof,surface,stadium_id,stadium
2023_01_DET_KC,2023,REG,1,2023-09-07,Thursday,20:20,DET,21,KC,20,0,outdoors,grass,KAN00,GEHA Field at Arrowhead Stadium
2023_01_CAR_ATL,2023,REG,1,2023-09-10,Sunday,13:00,CAR,10,ATL,24,1,closed,fieldturf,ATL97,Mercedes-Benz Stadium
2022_01_BUF_LA,2022,REG,1,2022-09-08,Thursday,20:20,BUF,31,LA,10,0,outdoors,grass,LAX01,SoFi Stadium
";

const PLAYERS: &str = "\
gsis_id,first_name,last_name,position,latest_team,status,birth_date,height,weight,college_name,entry_year,draft_number
00-0033873,Patrick,Mahomes,QB,KC,ACT,1995-09-17,74,225,Texas Tech,2017,10
00-0036223,Jahmyr,Gibbs,RB,DET,ACT,2002-03-20,69,200,Alabama,2023,12
00-0039165,Bijan,Robinson,RB,ATL,ACT,2002-01-30,71,215,Texas,2023,8
00-0033303,Harrison,Butker,K,KC,ACT,1995-07-14,76,196,Georgia Tech,2017,233
";

const WEEKLY: &str = "\
player_id,position,recent_team,season,week,attempts,carries,fg_att
00-0033873,QB,KC,2023,1,39,6,0
00-0036223,RB,DET,2023,1,0,9,0
00-0039165,RB,ATL,2023,1,0,10,0
00-0033303,K,KC,2023,1,0,0,5
00-0099999,WR,KC,2023,1,0,0,0
";

fn context(data_dir: &Path) -> CommandContext {
    CommandContext::from_parts(
        Box::new(SqliteWarehouse::open_in_memory().unwrap()),
        Box::new(LocalDirSource::new(data_dir)),
    )
}

async fn ready_context(data_dir: &Path) -> CommandContext {
    let ctx = context(data_dir);
    handle_setup(&ctx).await.unwrap();
    ctx
}

#[tokio::test]
async fn test_setup_creates_every_table_once() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ready_context(dir.path()).await;

    for table in Table::ALL {
        assert!(ctx.warehouse().table_exists(table).await.unwrap());
        assert_eq!(ctx.warehouse().count_rows(table).await.unwrap(), 0);
    }

    // Everything exists now
    handle_setup(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_schedule_load_fills_three_tables() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("games.csv"), GAMES).unwrap();
    let ctx = ready_context(dir.path()).await;

    let load = load_schedules(&ctx, Some(vec![Season::new(2023)])).await.unwrap();
    assert_eq!(
        load,
        ScheduleLoad {
            games: 2,
            stadiums: 2,
            teams: 4
        }
    );
    assert_eq!(ctx.warehouse().count_rows(Table::Games).await.unwrap(), 2);
    handle_count(&ctx, Table::Teams).await.unwrap();
}

#[tokio::test]
async fn test_failed_collection_keeps_previous_rows() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("games.csv"), GAMES).unwrap();
    let ctx = ready_context(dir.path()).await;
    load_schedules(&ctx, Some(vec![Season::new(2022), Season::new(2023)]))
        .await
        .unwrap();

    std::fs::remove_file(dir.path().join("games.csv")).unwrap();
    let result = load_schedules(&ctx, Some(vec![Season::new(2023)])).await;

    assert!(matches!(result, Err(PipelineError::NotFound { .. })));
    assert_eq!(ctx.warehouse().count_rows(Table::Games).await.unwrap(), 3);
}

#[tokio::test]
async fn test_stats_without_players_leave_table_untouched() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("games.csv"), GAMES).unwrap();
    std::fs::write(
        dir.path().join("player_stats_2023.csv"),
        "player_id,position,recent_team,season,week,attempts\n00-0033873,QB,KC,2023,1,39\n",
    )
    .unwrap();
    let ctx = ready_context(dir.path()).await;
    load_schedules(&ctx, Some(vec![Season::new(2023)])).await.unwrap();

    let loaded = load_player_game_stats(&ctx, None).await.unwrap();
    assert_eq!(loaded, 0);
}

#[tokio::test]
async fn test_truncate_falls_back_to_delete() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("games.csv"), GAMES).unwrap();
    let ctx = ready_context(dir.path()).await;
    load_schedules(&ctx, Some(vec![Season::new(2023)])).await.unwrap();

    handle_truncate(&ctx, Table::Games, false).await.unwrap();
    assert_eq!(ctx.warehouse().count_rows(Table::Games).await.unwrap(), 0);
    assert_eq!(ctx.warehouse().count_rows(Table::Teams).await.unwrap(), 4);
}

#[tokio::test]
async fn test_count_missing_table_errors() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());

    assert!(handle_count(&ctx, Table::Players).await.is_err());
}

#[tokio::test]
async fn test_setup_populates_new_player_seasons_table() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("games.csv"), GAMES).unwrap();
    std::fs::write(dir.path().join("players.csv"), PLAYERS).unwrap();
    std::fs::write(dir.path().join("player_stats_2023.csv"), WEEKLY).unwrap();
    let ctx = context(dir.path());

    // Everything except PlayerSeasons is already in place
    for table in Table::ALL.into_iter().filter(|t| *t != Table::PlayerSeasons) {
        assert!(ensure_table(ctx.warehouse(), &TableSchema::for_table(table)).await.unwrap());
    }
    load_schedules(&ctx, Some(vec![Season::new(2023)])).await.unwrap();
    assert_eq!(load_players(&ctx).await.unwrap(), 4);

    handle_setup(&ctx).await.unwrap();

    assert_eq!(ctx.warehouse().count_rows(Table::PlayerSeasons).await.unwrap(), 4);
}
