//! Warehouse table definitions.
//!
//! A [`TableSchema`] is the single source of truth for a table's columns. It is
//! rendered to the BigQuery REST representation when provisioning the cloud
//! dataset and to DDL for the SQLite backend.

use serde_json::{json, Value};

use crate::cli::types::Table;

mod tables;

pub use tables::{
    games_schema, player_game_stats_schema, player_seasons_schema, players_schema,
    stadiums_schema, teams_schema,
};

/// Column types used by the warehouse tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int64,
    Float64,
    Boolean,
    Date,
    Timestamp,
}

impl FieldType {
    /// Standard SQL type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Int64 => "INT64",
            FieldType::Float64 => "FLOAT64",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Date => "DATE",
            FieldType::Timestamp => "TIMESTAMP",
        }
    }

    /// Storage class in SQLite. Dates and timestamps stay as formatted text.
    pub fn sqlite_type(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::Date | FieldType::Timestamp => "TEXT",
            FieldType::Int64 | FieldType::Boolean => "INTEGER",
            FieldType::Float64 => "REAL",
        }
    }

    /// Parse a type name as returned in BigQuery query results (legacy aliases included).
    pub fn from_bigquery(name: &str) -> Option<Self> {
        match name {
            "STRING" => Some(FieldType::String),
            "INT64" | "INTEGER" => Some(FieldType::Int64),
            "FLOAT64" | "FLOAT" | "NUMERIC" => Some(FieldType::Float64),
            "BOOL" | "BOOLEAN" => Some(FieldType::Boolean),
            "DATE" => Some(FieldType::Date),
            "TIMESTAMP" | "DATETIME" => Some(FieldType::Timestamp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Nullable,
    Required,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Nullable => "NULLABLE",
            Mode::Required => "REQUIRED",
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub field_type: FieldType,
    pub mode: Mode,
    pub description: Option<&'static str>,
}

impl FieldSchema {
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            mode: Mode::Nullable,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.mode = Mode::Required;
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn to_bigquery(&self) -> Value {
        let mut field = json!({
            "name": self.name,
            "type": self.field_type.as_str(),
            "mode": self.mode.as_str(),
        });
        if let Some(description) = self.description {
            field["description"] = json!(description);
        }
        field
    }
}

/// Column layout of one warehouse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table: Table,
    pub description: Option<&'static str>,
    pub fields: Vec<FieldSchema>,
}

impl TableSchema {
    /// Schema of any managed table.
    pub fn for_table(table: Table) -> Self {
        match table {
            Table::Players => players_schema(),
            Table::Teams => teams_schema(),
            Table::Games => games_schema(),
            Table::Stadiums => stadiums_schema(),
            Table::PlayerGameStats => player_game_stats_schema(),
            Table::PlayerSeasons => player_seasons_schema(),
        }
    }

    /// All six schemas in creation order.
    pub fn all() -> Vec<Self> {
        Table::ALL.into_iter().map(Self::for_table).collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Body of a `tables.insert` request.
    pub fn to_bigquery_json(&self, project_id: &str, dataset_id: &str) -> Value {
        let mut table = json!({
            "tableReference": {
                "projectId": project_id,
                "datasetId": dataset_id,
                "tableId": self.table.name(),
            },
            "schema": {
                "fields": self.fields.iter().map(FieldSchema::to_bigquery).collect::<Vec<_>>(),
            },
        });
        if let Some(description) = self.description {
            table["description"] = json!(description);
        }
        table
    }

    /// `CREATE TABLE` statement for SQLite.
    pub fn to_sqlite_ddl(&self) -> String {
        let columns: Vec<String> = self
            .fields
            .iter()
            .map(|f| {
                let not_null = if f.mode == Mode::Required { " NOT NULL" } else { "" };
                format!("    \"{}\" {}{}", f.name, f.field_type.sqlite_type(), not_null)
            })
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (\n{}\n)",
            self.table.name(),
            columns.join(",\n")
        )
    }
}
