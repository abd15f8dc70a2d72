//! NFL data warehouse loader
//!
//! Collects player, schedule and per-game statistics from the public nflverse
//! releases, shapes them into a normalized schema and loads them into BigQuery
//! (or a local SQLite file).
//!
//! ## Tables
//!
//! - **Players**: active players with biographical and draft details
//! - **Games**: schedule, results and betting lines
//! - **Stadiums** and **Teams**: derived from the schedule
//! - **PlayerSeasons**: team and primary position per player and season
//! - **PlayerGameStats**: one row per player per game, kicking from play-by-play
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fantasy_football::{
//!     commands::{setup::handle_setup, update_all::handle_update_all, CommandContext},
//!     nflverse::LocalDirSource,
//!     warehouse::SqliteWarehouse,
//!     Season,
//! };
//!
//! # async fn example() -> fantasy_football::Result<()> {
//! let ctx = CommandContext::from_parts(
//!     Box::new(SqliteWarehouse::open_in_memory()?),
//!     Box::new(LocalDirSource::new("/data/nflverse")),
//! );
//!
//! handle_setup(&ctx).await?;
//! handle_update_all(&ctx, Some(vec![Season::new(2023)])).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BQ_PROJECT_ID=my-project
//! export BQ_DATASET_ID=fantasy_football
//! ```

pub mod cli;
pub mod collect;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod nflverse;
pub mod schema;
pub mod transform;
pub mod warehouse;

// Re-export commonly used types
pub use cli::types::{Position, Season, Table, Week};
pub use error::{PipelineError, Result};
