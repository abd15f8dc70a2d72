//! Direct table maintenance: truncate and count.

use super::common::CommandContext;
use crate::{
    cli::types::Table,
    warehouse::maintenance::{truncate_table, verify_table_empty},
    Result,
};

/// Clear `table` and verify nothing remains. Leftover rows fail unless `allow_nonempty`.
pub async fn handle_truncate(ctx: &CommandContext, table: Table, allow_nonempty: bool) -> Result<()> {
    truncate_table(ctx.warehouse(), table).await?;
    let remaining = verify_table_empty(ctx.warehouse(), table, !allow_nonempty).await?;
    if remaining == 0 {
        println!("✓ {} is empty", table);
    } else {
        println!("⚠ {} still holds {} rows", table, remaining);
    }
    Ok(())
}

pub async fn handle_count(ctx: &CommandContext, table: Table) -> Result<()> {
    let rows = ctx.warehouse().count_rows(table).await?;
    println!("{}: {} rows", table, rows);
    Ok(())
}
