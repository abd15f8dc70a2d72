//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fantasy_football::{
    cli::{Commands, FantasyFootball, UpdateCmd},
    commands::{
        setup::handle_setup,
        tables::{handle_count, handle_truncate},
        update_all::handle_update_all,
        update_player_game_stats::handle_update_player_game_stats,
        update_player_seasons::handle_update_player_seasons,
        update_players::handle_update_players,
        update_schedules::handle_update_games,
        CommandContext,
    },
    config::Settings,
    logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FantasyFootball::parse();
    logging::init(app.global.verbose);

    let settings = Settings::resolve(&app.global).context("Invalid configuration")?;
    let ctx = CommandContext::new(&settings).context("Could not open the warehouse")?;

    match app.command {
        Commands::Setup => handle_setup(&ctx).await.context("Setup failed")?,

        Commands::Update { cmd } => match cmd {
            UpdateCmd::Players => handle_update_players(&ctx)
                .await
                .context("Updating Players failed")?,
            UpdateCmd::Games { seasons } => handle_update_games(&ctx, seasons.requested())
                .await
                .context("Updating Games, Stadiums and Teams failed")?,
            UpdateCmd::PlayerSeasons { seasons } => {
                handle_update_player_seasons(&ctx, seasons.requested())
                    .await
                    .context("Updating PlayerSeasons failed")?
            }
            UpdateCmd::PlayerGameStats { seasons } => {
                handle_update_player_game_stats(&ctx, seasons.requested())
                    .await
                    .context("Updating PlayerGameStats failed")?
            }
            UpdateCmd::All { seasons } => handle_update_all(&ctx, seasons.requested())
                .await
                .context("Full update failed")?,
        },

        Commands::Truncate {
            table,
            allow_nonempty,
        } => handle_truncate(&ctx, table, allow_nonempty)
            .await
            .with_context(|| format!("Truncating {} failed", table))?,

        Commands::Count { table } => handle_count(&ctx, table)
            .await
            .with_context(|| format!("Counting {} failed", table))?,
    }

    Ok(())
}
