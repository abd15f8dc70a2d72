//! CLI argument definitions and parsing structures.

use super::types::{table::Table, time::Season};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storage backend receiving the collected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Google BigQuery (REST API)
    #[default]
    Bigquery,
    /// Local SQLite database file
    Sqlite,
}

/// Options shared by every command.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Storage backend.
    #[clap(long, value_enum, global = true, default_value_t = Backend::Bigquery)]
    pub backend: Backend,

    /// Google Cloud project (or set `BQ_PROJECT_ID`).
    #[clap(long, global = true)]
    pub project_id: Option<String>,

    /// BigQuery dataset (or set `BQ_DATASET_ID`).
    #[clap(long, global = true)]
    pub dataset_id: Option<String>,

    /// BigQuery dataset location (or set `BQ_LOCATION`).
    #[clap(long, global = true)]
    pub location: Option<String>,

    /// SQLite database file for `--backend sqlite` (or set `FANTASY_FOOTBALL_DB`).
    #[clap(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Read nflverse CSV files from this directory instead of downloading them
    /// (or set `NFLVERSE_DATA_DIR`).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Ignore cached nflverse downloads.
    #[clap(long, global = true)]
    pub refresh: bool,

    /// Show debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

/// Season selection shared by the update commands.
#[derive(Debug, Default, Args)]
pub struct SeasonArgs {
    /// Season to collect (repeatable): `-s 2022 -s 2023`.
    #[clap(long = "season", short = 's')]
    pub seasons: Vec<Season>,
}

impl SeasonArgs {
    /// Requested seasons, sorted and deduplicated, or `None` when nothing was given.
    pub fn requested(&self) -> Option<Vec<Season>> {
        if self.seasons.is_empty() {
            return None;
        }
        let mut seasons = self.seasons.clone();
        seasons.sort();
        seasons.dedup();
        Some(seasons)
    }
}

#[derive(Debug, Subcommand)]
pub enum UpdateCmd {
    /// Refresh the Players table with every active player.
    Players,

    /// Refresh the Games, Stadiums and Teams tables from the schedule.
    ///
    /// Defaults to the last five seasons.
    Games {
        #[clap(flatten)]
        seasons: SeasonArgs,
    },

    /// Refresh the PlayerSeasons table (team and primary position per season).
    ///
    /// Defaults to the seasons already present in the Games table.
    PlayerSeasons {
        #[clap(flatten)]
        seasons: SeasonArgs,
    },

    /// Refresh the PlayerGameStats table from weekly and play-by-play data.
    ///
    /// Defaults to the seasons already present in the Games table.
    PlayerGameStats {
        #[clap(flatten)]
        seasons: SeasonArgs,
    },

    /// Refresh every table in dependency order.
    All {
        #[clap(flatten)]
        seasons: SeasonArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "fantasy-football",
    about = "Load NFL players, games, stadiums, teams and player game stats into a warehouse"
)]
pub struct FantasyFootball {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the dataset and any missing tables.
    Setup,

    /// Collect, transform and reload warehouse tables.
    Update {
        #[clap(subcommand)]
        cmd: UpdateCmd,
    },

    /// Remove every row from a table and verify it is empty.
    Truncate {
        #[clap(value_enum)]
        table: Table,

        /// Only warn when rows remain instead of failing.
        #[clap(long)]
        allow_nonempty: bool,
    },

    /// Print the number of rows in a table.
    Count {
        #[clap(value_enum)]
        table: Table,
    },
}
