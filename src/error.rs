//! Error types for the fantasy football data pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("{name} not provided and {env_var} environment variable not set")]
    MissingSetting { name: String, env_var: String },

    #[error("BigQuery request failed ({status}): {message}")]
    BigQuery { status: u16, message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Table {table} contains {rows} rows after truncation attempt")]
    TableNotEmpty { table: String, rows: u64 },

    #[error("{operation} is not supported by the {backend} backend")]
    Unsupported { operation: String, backend: String },

    #[error("Failed to insert {failed_rows} rows into {table}")]
    InsertFailed { table: String, failed_rows: usize },

    #[error("Invalid table: {name}")]
    InvalidTable { name: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("No data available: {what}")]
    NoData { what: String },
}
