//! Storage backends for the analytical tables.
//!
//! - `bigquery`: Google BigQuery over the REST v2 API (the production target)
//! - `sqlite`: a local file or in-memory database with the same tables
//! - `maintenance`: create / truncate / verify / upload flows shared by both
//! - `reads`: typed lookups the pipeline performs against loaded tables

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{cli::types::Table, schema::TableSchema, Result};

pub mod auth;
pub mod bigquery;
pub mod maintenance;
pub mod reads;
pub mod sqlite;

pub use auth::AccessToken;
pub use bigquery::BigQueryWarehouse;
pub use sqlite::SqliteWarehouse;

/// One result row keyed by column name.
pub type Row = Map<String, Value>;

/// A row the warehouse refused, with its position in the submitted slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertError {
    pub index: usize,
    pub message: String,
}

/// A single-table `SELECT` both backends can run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub table: Table,
    pub columns: Vec<&'static str>,
    pub distinct: bool,
    /// `column IN (values...)`
    pub filter: Option<(&'static str, Vec<i64>)>,
    pub order_by: Vec<&'static str>,
}

impl Select {
    pub fn from(table: Table, columns: &[&'static str]) -> Self {
        Self {
            table,
            columns: columns.to_vec(),
            distinct: false,
            filter: None,
            order_by: Vec::new(),
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filter_in(mut self, column: &'static str, values: Vec<i64>) -> Self {
        self.filter = Some((column, values));
        self
    }

    pub fn order_by(mut self, columns: &[&'static str]) -> Self {
        self.order_by = columns.to_vec();
        self
    }

    /// Render the statement against a backend-specific table reference.
    pub fn to_sql(&self, table_ref: &str) -> String {
        let mut sql = format!(
            "SELECT {}{} FROM {}",
            if self.distinct { "DISTINCT " } else { "" },
            self.columns.join(", "),
            table_ref
        );

        if let Some((column, values)) = &self.filter {
            if values.is_empty() {
                sql.push_str(" WHERE FALSE");
            } else {
                let list: Vec<String> = values.iter().map(i64::to_string).collect();
                sql.push_str(&format!(" WHERE {} IN ({})", column, list.join(", ")));
            }
        }

        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }
        sql
    }
}

/// Operations the pipeline needs from an analytical store.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Human-readable target, e.g. `BigQuery dataset proj.fantasy_football`.
    fn describe(&self) -> String;

    /// Create the dataset if missing. Returns `true` when it was created.
    async fn ensure_dataset(&self) -> Result<bool>;

    async fn table_exists(&self, table: Table) -> Result<bool>;

    async fn create_table(&self, schema: &TableSchema) -> Result<()>;

    /// `TRUNCATE TABLE`; backends without it return `Unsupported`.
    async fn truncate(&self, table: Table) -> Result<()>;

    /// `DELETE FROM table WHERE true`.
    async fn delete_all(&self, table: Table) -> Result<()>;

    async fn count_rows(&self, table: Table) -> Result<u64>;

    /// Insert JSON object rows; rejected rows are reported, not raised.
    async fn insert_rows(&self, table: Table, rows: &[Value]) -> Result<Vec<InsertError>>;

    async fn select(&self, query: &Select) -> Result<Vec<Row>>;
}

/// Serialize typed rows into the JSON objects handed to [`Warehouse::insert_rows`].
pub fn to_rows<T: Serialize>(items: &[T]) -> Result<Vec<Value>> {
    Ok(items
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql() {
        let query = Select::from(Table::Games, &["game_id", "week_number"])
            .filter_in("season_year", vec![2022, 2023])
            .order_by(&["season_year", "week_number"]);

        assert_eq!(
            query.to_sql("`p.d.Games`"),
            "SELECT game_id, week_number FROM `p.d.Games` WHERE season_year IN (2022, 2023) \
             ORDER BY season_year, week_number"
        );
    }

    #[test]
    fn test_select_distinct_and_empty_filter() {
        let query = Select::from(Table::Games, &["season_year"])
            .distinct()
            .filter_in("season_year", Vec::new());
        assert_eq!(
            query.to_sql("\"Games\""),
            "SELECT DISTINCT season_year FROM \"Games\" WHERE FALSE"
        );
    }

    #[test]
    fn test_to_rows() {
        #[derive(Serialize)]
        struct Item {
            id: &'static str,
            value: Option<i64>,
        }

        let rows = to_rows(&[Item { id: "a", value: None }, Item { id: "b", value: Some(2) }])
            .unwrap();
        assert_eq!(rows[0]["id"], "a");
        assert!(rows[0]["value"].is_null());
        assert_eq!(rows[1]["value"], 2);
    }
}
