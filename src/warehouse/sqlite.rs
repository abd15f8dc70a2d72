//! SQLite backend for offline runs and tests.

use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use rusqlite::{
    params_from_iter,
    types::{Value as SqlValue, ValueRef},
    Connection,
};
use serde_json::Value;

use super::{InsertError, Row, Select, Warehouse};
use crate::{
    cli::types::Table,
    schema::{FieldType, TableSchema},
    PipelineError, Result,
};

/// Warehouse tables stored in one SQLite database.
pub struct SqliteWarehouse {
    conn: Mutex<Connection>,
    location: String,
}

impl SqliteWarehouse {
    /// Open (or create) a database file, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn, path.display().to_string()))
    }

    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn, ":memory:".to_string()))
    }

    fn from_connection(conn: Connection, location: String) -> Self {
        Self {
            conn: Mutex::new(conn),
            location,
        }
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn quoted(table: Table) -> String {
    format!("\"{}\"", table.name())
}

fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

fn to_json_value(value: ValueRef<'_>, field_type: Option<FieldType>) -> Value {
    match (value, field_type) {
        (ValueRef::Null, _) => Value::Null,
        (ValueRef::Integer(i), Some(FieldType::Boolean)) => Value::Bool(i != 0),
        (ValueRef::Integer(i), _) => Value::from(i),
        (ValueRef::Real(f), _) => Value::from(f),
        (ValueRef::Text(t), _) => Value::from(String::from_utf8_lossy(t).into_owned()),
        (ValueRef::Blob(b), _) => Value::from(String::from_utf8_lossy(b).into_owned()),
    }
}

#[async_trait]
impl Warehouse for SqliteWarehouse {
    fn describe(&self) -> String {
        format!("SQLite database {}", self.location)
    }

    async fn ensure_dataset(&self) -> Result<bool> {
        // The database file is the dataset; opening it created it
        Ok(false)
    }

    async fn table_exists(&self, table: Table) -> Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table.name()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        self.conn().execute(&schema.to_sqlite_ddl(), [])?;
        Ok(())
    }

    async fn truncate(&self, _table: Table) -> Result<()> {
        Err(PipelineError::Unsupported {
            operation: "TRUNCATE TABLE".to_string(),
            backend: "SQLite".to_string(),
        })
    }

    async fn delete_all(&self, table: Table) -> Result<()> {
        self.conn()
            .execute(&format!("DELETE FROM {} WHERE true", quoted(table)), [])?;
        Ok(())
    }

    async fn count_rows(&self, table: Table) -> Result<u64> {
        let count: i64 =
            self.conn()
                .query_row(&format!("SELECT COUNT(*) FROM {}", quoted(table)), [], |row| {
                    row.get(0)
                })?;
        Ok(count.max(0) as u64)
    }

    async fn insert_rows(&self, table: Table, rows: &[Value]) -> Result<Vec<InsertError>> {
        let schema = TableSchema::for_table(table);
        let columns = schema.column_names();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quoted(table),
            columns
                .iter()
                .map(|c| format!("\"{}\"", c))
                .collect::<Vec<_>>()
                .join(", "),
            placeholders.join(", ")
        );

        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let mut errors = Vec::new();
        {
            let mut stmt = tx.prepare(&sql)?;
            for (index, row) in rows.iter().enumerate() {
                let Some(object) = row.as_object() else {
                    errors.push(InsertError {
                        index,
                        message: "row is not a JSON object".to_string(),
                    });
                    continue;
                };

                let values = columns
                    .iter()
                    .map(|c| object.get(*c).map(to_sql_value).unwrap_or(SqlValue::Null));
                if let Err(e) = stmt.execute(params_from_iter(values)) {
                    errors.push(InsertError {
                        index,
                        message: e.to_string(),
                    });
                }
            }
        }
        tx.commit()?;
        Ok(errors)
    }

    async fn select(&self, query: &Select) -> Result<Vec<Row>> {
        let schema = TableSchema::for_table(query.table);
        let types: Vec<Option<FieldType>> = query
            .columns
            .iter()
            .map(|c| schema.field(c).map(|f| f.field_type))
            .collect();

        let conn = self.conn();
        let mut stmt = conn.prepare(&query.to_sql(&quoted(query.table)))?;
        let mut rows = stmt.query([])?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Row::new();
            for (i, column) in query.columns.iter().enumerate() {
                record.insert(column.to_string(), to_json_value(row.get_ref(i)?, types[i]));
            }
            out.push(record);
        }
        Ok(out)
    }
}
