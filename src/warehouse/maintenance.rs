//! Table maintenance shared by every backend.

use serde::Serialize;
use serde_json::Value;

use super::{to_rows, Warehouse};
use crate::{cli::types::Table, schema::TableSchema, PipelineError, Result};

/// Largest `insertAll` request BigQuery accepts.
pub const BATCH_SIZE: usize = 10_000;

/// Create the table unless it exists. Returns `true` when it was created.
pub async fn ensure_table(warehouse: &dyn Warehouse, schema: &TableSchema) -> Result<bool> {
    if warehouse.table_exists(schema.table).await? {
        tracing::info!("{} table already exists", schema.table);
        return Ok(false);
    }

    warehouse.create_table(schema).await?;
    tracing::info!("Created {} table", schema.table);
    Ok(true)
}

/// Remove every row, falling back to `DELETE` when `TRUNCATE` is rejected.
pub async fn truncate_table(warehouse: &dyn Warehouse, table: Table) -> Result<()> {
    match warehouse.truncate(table).await {
        Ok(()) => {
            tracing::info!("Truncated {}", table);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("TRUNCATE on {} failed ({}), deleting rows instead", table, e);
            warehouse.delete_all(table).await.map_err(|e| {
                tracing::error!("DELETE on {} failed: {}", table, e);
                e
            })?;
            tracing::info!("Deleted all rows from {}", table);
            Ok(())
        }
    }
}

/// Count what is left in `table`; non-empty is an error only when `fail_if_not_empty`.
pub async fn verify_table_empty(
    warehouse: &dyn Warehouse,
    table: Table,
    fail_if_not_empty: bool,
) -> Result<u64> {
    let rows = warehouse.count_rows(table).await?;
    if rows > 0 {
        if fail_if_not_empty {
            return Err(PipelineError::TableNotEmpty {
                table: table.to_string(),
                rows,
            });
        }
        tracing::warn!("{} still contains {} rows", table, rows);
    }
    Ok(rows)
}

/// Upload rows in batches of [`BATCH_SIZE`]. Returns the number of rows stored.
pub async fn upload_rows(warehouse: &dyn Warehouse, table: Table, rows: &[Value]) -> Result<usize> {
    upload_in_batches(warehouse, table, rows, BATCH_SIZE).await
}

pub(crate) async fn upload_in_batches(
    warehouse: &dyn Warehouse,
    table: Table,
    rows: &[Value],
    batch_size: usize,
) -> Result<usize> {
    if rows.is_empty() {
        tracing::warn!("No rows to upload to {}", table);
        return Ok(0);
    }

    let batches = rows.len().div_ceil(batch_size);
    let mut failed_rows = 0;

    for (i, batch) in rows.chunks(batch_size).enumerate() {
        let errors = warehouse.insert_rows(table, batch).await?;
        if errors.is_empty() {
            tracing::info!("Uploaded batch {}/{} ({} rows) to {}", i + 1, batches, batch.len(), table);
        } else {
            for e in errors.iter().take(5) {
                tracing::error!("{} row {}: {}", table, i * batch_size + e.index, e.message);
            }
            tracing::error!(
                "Batch {}/{} to {}: {} of {} rows rejected",
                i + 1,
                batches,
                table,
                errors.len(),
                batch.len()
            );
            failed_rows += errors.len();
        }
    }

    if failed_rows > 0 {
        return Err(PipelineError::InsertFailed {
            table: table.to_string(),
            failed_rows,
        });
    }
    Ok(rows.len())
}

/// Replace the contents of `table`: truncate, verify empty, upload.
///
/// Nothing is touched when `items` is empty, so a failed or empty collection
/// leaves the previous load in place.
pub async fn refresh_table<T: Serialize>(
    warehouse: &dyn Warehouse,
    table: Table,
    items: &[T],
) -> Result<usize> {
    if items.is_empty() {
        tracing::warn!("No {} rows collected; leaving table unchanged", table);
        return Ok(0);
    }

    let rows = to_rows(items)?;
    truncate_table(warehouse, table).await?;
    verify_table_empty(warehouse, table, true).await?;
    upload_rows(warehouse, table, &rows).await
}
