//! Column definitions of the six warehouse tables.

use super::{FieldSchema, FieldType, TableSchema};
use crate::cli::types::Table;

use FieldType::{Boolean, Date, Float64, Int64, String, Timestamp};

fn field(name: &'static str, field_type: FieldType) -> FieldSchema {
    FieldSchema::new(name, field_type)
}

fn audit_fields() -> [FieldSchema; 2] {
    [
        field("created_at", Timestamp)
            .describe("Timestamp when this record was created in the database"),
        field("updated_at", Timestamp)
            .describe("Timestamp when this record was last updated in the database"),
    ]
}

fn table(table: Table, description: Option<&'static str>, fields: Vec<FieldSchema>) -> TableSchema {
    let mut fields = fields;
    fields.extend(audit_fields());
    TableSchema {
        table,
        description,
        fields,
    }
}

pub fn players_schema() -> TableSchema {
    table(
        Table::Players,
        None,
        vec![
            field("player_id", String).required(),
            field("first_name", String),
            field("last_name", String),
            field("position", String),
            field("team_id", String),
            field("team_abbr", String),
            field("birth_date", Date),
            field("height", Float64),
            field("weight", Float64),
            field("college", String),
            field("draft_year", Int64),
            field("draft_position", Int64),
            field("active_status", Boolean),
        ],
    )
}

pub fn teams_schema() -> TableSchema {
    table(
        Table::Teams,
        None,
        vec![
            field("team_id", String).required(),
            field("team_name", String),
            field("team_city", String),
            field("team_abbreviation", String),
            field("conference", String),
            field("division", String),
            field("stadium_id", String),
        ],
    )
}

pub fn games_schema() -> TableSchema {
    table(
        Table::Games,
        None,
        vec![
            field("game_id", String).required(),
            field("season_year", Int64),
            field("week_number", Int64),
            field("home_team_id", String),
            field("home_team_abbr", String),
            field("away_team_id", String),
            field("away_team_abbr", String),
            field("game_date", Date),
            field("game_time", String),
            field("stadium_id", String),
            field("primetime_flag", Boolean),
            field("divisional_matchup_flag", Boolean),
            field("home_score", Int64),
            field("away_score", Int64),
            field("home_qb_id", String),
            field("away_qb_id", String),
            field("home_moneyline", Float64),
            field("away_moneyline", Float64),
            field("spread_line", Float64),
            field("home_spread_odds", Float64),
            field("away_spread_odds", Float64),
            field("total_line", Float64),
            field("over_odds", Float64),
            field("under_odds", Float64),
        ],
    )
}

pub fn stadiums_schema() -> TableSchema {
    table(
        Table::Stadiums,
        Some("NFL stadium information including location, playing surface, and facility details."),
        vec![
            field("stadium_id", String)
                .required()
                .describe("Unique identifier for the stadium"),
            field("stadium_name", String).describe("Full name of the stadium"),
            field("city", String).describe("City where the stadium is located"),
            field("state", String).describe("State or region where the stadium is located"),
            field("dome_flag", Boolean).describe("Indicates if the stadium is a dome/indoor facility"),
            field("surface_type", String).describe("Type of playing surface (e.g., grass, turf)"),
            field("latitude", Float64).describe("Geographic latitude coordinate"),
            field("longitude", Float64).describe("Geographic longitude coordinate"),
        ],
    )
}

pub fn player_game_stats_schema() -> TableSchema {
    table(
        Table::PlayerGameStats,
        Some(
            "NFL player game statistics including passing, rushing, receiving, kicking, defensive, and return stats.",
        ),
        vec![
            field("stat_id", String)
                .required()
                .describe("Unique identifier for the stat record (composite of player_id and game_id)"),
            field("player_id", String)
                .required()
                .describe("Player identifier, foreign key to Players table"),
            field("game_id", String)
                .required()
                .describe("Game identifier, foreign key to Games table"),
            field("team_id", String).describe("Team identifier, foreign key to Teams table"),
            field("position_played", String).describe("Position played during this game"),
            field("snaps_played", Int64).describe("Number of snaps played in the game"),
            field("starter_flag", Boolean).describe("Indicates if player started the game"),
            // Passing
            field("passing_attempts", Int64).describe("Number of passing attempts"),
            field("passing_completions", Int64).describe("Number of completed passes"),
            field("passing_yards", Int64).describe("Total passing yards"),
            field("passing_tds", Int64).describe("Number of passing touchdowns"),
            field("passing_ints", Int64).describe("Number of interceptions thrown"),
            // Rushing
            field("rushing_attempts", Int64).describe("Number of rushing attempts"),
            field("rushing_yards", Int64).describe("Total rushing yards"),
            field("rushing_tds", Int64).describe("Number of rushing touchdowns"),
            // Receiving
            field("receiving_targets", Int64).describe("Number of times targeted for a pass"),
            field("receptions", Int64).describe("Number of passes caught"),
            field("receiving_yards", Int64).describe("Total receiving yards"),
            field("receiving_tds", Int64).describe("Number of receiving touchdowns"),
            // Fumbles
            field("fumbles", Int64).describe("Total fumbles"),
            field("fumbles_lost", Int64).describe("Number of fumbles lost to the opposing team"),
            // Kicking
            field("field_goals_attempted", Int64).describe("Number of field goals attempted"),
            field("field_goals_made", Int64).describe("Number of field goals made"),
            field("extra_points_attempted", Int64).describe("Number of extra points attempted"),
            field("extra_points_made", Int64).describe("Number of extra points made"),
            // Defense
            field("defensive_sacks", Float64).describe("Number of sacks (can be partial)"),
            field("defensive_tackles", Int64).describe("Total tackles (solo + assisted)"),
            field("defensive_interceptions", Int64)
                .describe("Number of interceptions caught on defense"),
            field("defensive_fumbles_recovered", Int64)
                .describe("Number of fumbles recovered on defense"),
            field("defensive_tds", Int64).describe("Number of defensive touchdowns scored"),
            // Returns
            field("punt_returns", Int64).describe("Number of punt returns"),
            field("punt_return_yards", Int64).describe("Total punt return yards"),
            field("punt_return_tds", Int64).describe("Number of punt return touchdowns"),
            field("kick_returns", Int64).describe("Number of kickoff returns"),
            field("kick_return_yards", Int64).describe("Total kickoff return yards"),
            field("kick_return_tds", Int64).describe("Number of kickoff return touchdowns"),
        ],
    )
}

pub fn player_seasons_schema() -> TableSchema {
    table(
        Table::PlayerSeasons,
        Some("NFL player team and position information per season."),
        vec![
            field("player_season_id", String)
                .required()
                .describe("Unique identifier for the player-season record (player_id + season_year)"),
            field("player_id", String)
                .required()
                .describe("Player identifier, foreign key to Players table"),
            field("season_year", Int64)
                .required()
                .describe("NFL season year"),
            field("team_id", String).describe("Identifier of the player's team for this season"),
            field("team_abbr", String).describe("Abbreviation of the player's team for this season"),
            field("primary_position", String).describe("Player's primary position during this season"),
        ],
    )
}
