//! Provision the dataset and every table.

use super::{common::CommandContext, update_player_seasons::load_player_seasons};
use crate::{
    cli::types::Table,
    schema::TableSchema,
    warehouse::maintenance::ensure_table,
    Result,
};

/// Create the dataset and any missing table.
///
/// A newly created `PlayerSeasons` table is populated right away from the
/// seasons already present in `Games`.
pub async fn handle_setup(ctx: &CommandContext) -> Result<()> {
    let warehouse = ctx.warehouse();
    tracing::info!("Setting up {}", warehouse.describe());

    if warehouse.ensure_dataset().await? {
        println!("✓ Created dataset");
    }

    let mut created = Vec::new();
    for schema in TableSchema::all() {
        if ensure_table(warehouse, &schema).await? {
            created.push(schema.table);
        }
    }

    if created.contains(&Table::PlayerSeasons) {
        let loaded = load_player_seasons(ctx, None).await?;
        println!("✓ Populated {} with {} rows", Table::PlayerSeasons, loaded);
    }

    println!(
        "✓ Setup complete: {} tables created, {} already present",
        created.len(),
        Table::ALL.len() - created.len()
    );
    Ok(())
}
