//! BigQuery backend over the REST v2 API.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{auth::AccessToken, InsertError, Row, Select, Warehouse};
use crate::{
    cli::types::Table,
    config::BigQuerySettings,
    core::time::format_timestamp,
    schema::{FieldType, TableSchema},
    PipelineError, Result,
};


pub const BIGQUERY_BASE_URL: &str = "https://bigquery.googleapis.com/bigquery/v2";

/// Server-side wait per query poll.
const QUERY_TIMEOUT_MS: u64 = 10_000;

pub struct BigQueryWarehouse {
    client: Client,
    base_url: String,
    project_id: String,
    dataset_id: String,
    location: String,
    token: AccessToken,
}

impl BigQueryWarehouse {
    pub fn new(settings: &BigQuerySettings) -> Self {
        Self {
            client: Client::new(),
            base_url: BIGQUERY_BASE_URL.to_string(),
            project_id: settings.project_id.clone(),
            dataset_id: settings.dataset_id.clone(),
            location: settings.location.clone(),
            token: AccessToken::from_setting(settings.access_token.clone()),
        }
    }

    /// Point the client at another API root (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: AccessToken) -> Self {
        self.token = token;
        self
    }

    fn project_url(&self) -> String {
        format!("{}/projects/{}", self.base_url, self.project_id)
    }

    fn dataset_url(&self) -> String {
        format!("{}/datasets/{}", self.project_url(), self.dataset_id)
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/tables/{}", self.dataset_url(), table.name())
    }

    /// Fully qualified reference for standard SQL.
    fn table_ref(&self, table: Table) -> String {
        format!("`{}.{}.{}`", self.project_id, self.dataset_id, table.name())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.bearer_auth(self.token.get().await?).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PipelineError::BigQuery {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// GET that maps 404 to `None`.
    async fn get_optional(&self, url: &str) -> Result<Option<Value>> {
        match self.send(self.client.get(url)).await {
            Ok(value) => Ok(Some(value)),
            Err(PipelineError::BigQuery { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Run a standard SQL statement to completion and collect every result page.
    async fn run_query(&self, sql: &str) -> Result<Vec<Row>> {
        tracing::debug!("Running query: {}", sql);

        let body = json!({
            "query": sql,
            "useLegacySql": false,
            "location": self.location,
            "timeoutMs": QUERY_TIMEOUT_MS,
        });
        let url = format!("{}/queries", self.project_url());
        let mut response: QueryResponse =
            serde_json::from_value(self.send(self.client.post(&url).json(&body)).await?)?;

        let mut rows = Vec::new();
        let mut fields: Vec<ResultField> = Vec::new();

        loop {
            let page_token = if response.job_complete {
                if let Some(schema) = response.schema.take() {
                    fields = schema.fields;
                }
                rows.extend(decode_rows(&fields, &response.rows));
                match response.page_token.take() {
                    Some(token) => Some(token),
                    None => break,
                }
            } else {
                None
            };

            let job = response.job_reference.take().ok_or_else(|| PipelineError::BigQuery {
                status: 200,
                message: "query response has no job reference".to_string(),
            })?;
            tracing::debug!("Polling query results for job {}", job.job_id);

            let mut params = vec![
                ("location", job.location.clone().unwrap_or_else(|| self.location.clone())),
                ("timeoutMs", QUERY_TIMEOUT_MS.to_string()),
            ];
            if let Some(token) = page_token {
                params.push(("pageToken", token));
            }

            let url = format!("{}/queries/{}", self.project_url(), job.job_id);
            response = serde_json::from_value(self.send(self.client.get(&url).query(&params)).await?)?;
            if response.job_reference.is_none() {
                response.job_reference = Some(job);
            }
        }

        Ok(rows)
    }
}

#[async_trait]
impl Warehouse for BigQueryWarehouse {
    fn describe(&self) -> String {
        format!("BigQuery dataset {}.{}", self.project_id, self.dataset_id)
    }

    async fn ensure_dataset(&self) -> Result<bool> {
        if self.get_optional(&self.dataset_url()).await?.is_some() {
            tracing::info!("Dataset {} already exists", self.dataset_id);
            return Ok(false);
        }

        let body = json!({
            "datasetReference": {
                "projectId": self.project_id,
                "datasetId": self.dataset_id,
            },
            "location": self.location,
        });
        let url = format!("{}/datasets", self.project_url());
        self.send(self.client.post(&url).json(&body)).await?;
        tracing::info!("Created dataset {}", self.dataset_id);
        Ok(true)
    }

    async fn table_exists(&self, table: Table) -> Result<bool> {
        Ok(self.get_optional(&self.table_url(table)).await?.is_some())
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let body = schema.to_bigquery_json(&self.project_id, &self.dataset_id);
        let url = format!("{}/tables", self.dataset_url());
        self.send(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    async fn truncate(&self, table: Table) -> Result<()> {
        self.run_query(&format!("TRUNCATE TABLE {}", self.table_ref(table)))
            .await
            .map(|_| ())
    }

    async fn delete_all(&self, table: Table) -> Result<()> {
        self.run_query(&format!("DELETE FROM {} WHERE true", self.table_ref(table)))
            .await
            .map(|_| ())
    }

    async fn count_rows(&self, table: Table) -> Result<u64> {
        let rows = self
            .run_query(&format!("SELECT COUNT(*) AS row_count FROM {}", self.table_ref(table)))
            .await?;
        rows.first()
            .and_then(|row| row.get("row_count"))
            .and_then(Value::as_u64)
            .ok_or_else(|| PipelineError::NoData {
                what: format!("row count of {}", table),
            })
    }

    async fn insert_rows(&self, table: Table, rows: &[Value]) -> Result<Vec<InsertError>> {
        let body = json!({
            "rows": rows.iter().map(|row| json!({ "json": row })).collect::<Vec<_>>(),
        });
        let url = format!("{}/insertAll", self.table_url(table));
        let response: InsertAllResponse =
            serde_json::from_value(self.send(self.client.post(&url).json(&body)).await?)?;

        Ok(response
            .insert_errors
            .into_iter()
            .map(|e| InsertError {
                index: e.index,
                message: e
                    .errors
                    .iter()
                    .map(|d| format!("{}: {}", d.reason, d.message))
                    .collect::<Vec<_>>()
                    .join("; "),
            })
            .collect())
    }

    async fn select(&self, query: &Select) -> Result<Vec<Row>> {
        self.run_query(&query.to_sql(&self.table_ref(query.table))).await
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse {
    #[serde(default)]
    job_complete: bool,
    job_reference: Option<JobReference>,
    schema: Option<ResultSchema>,
    #[serde(default)]
    rows: Vec<ResultRow>,
    page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobReference {
    job_id: String,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultSchema {
    #[serde(default)]
    fields: Vec<ResultField>,
}

#[derive(Debug, Deserialize)]
struct ResultField {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
}

#[derive(Debug, Deserialize)]
struct ResultRow {
    #[serde(default)]
    f: Vec<ResultCell>,
}

#[derive(Debug, Deserialize)]
struct ResultCell {
    #[serde(default)]
    v: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertAllResponse {
    #[serde(default)]
    insert_errors: Vec<RowErrors>,
}

#[derive(Debug, Deserialize)]
struct RowErrors {
    index: usize,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: String,
    #[serde(default)]
    message: String,
}

/// Pull `error.message` out of a Google API error envelope.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

fn decode_rows(fields: &[ResultField], rows: &[ResultRow]) -> Vec<Row> {
    rows.iter()
        .map(|row| {
            fields
                .iter()
                .zip(&row.f)
                .map(|(field, cell)| (field.name.clone(), decode_cell(&field.field_type, &cell.v)))
                .collect()
        })
        .collect()
}

/// Cells arrive as strings; restore the column's JSON type.
fn decode_cell(field_type: &str, raw: &Value) -> Value {
    let Some(text) = raw.as_str() else {
        return raw.clone();
    };

    match FieldType::from_bigquery(field_type) {
        Some(FieldType::Int64) => text.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
        Some(FieldType::Float64) => text.parse::<f64>().map(Value::from).unwrap_or(Value::Null),
        Some(FieldType::Boolean) => Value::Bool(text.eq_ignore_ascii_case("true")),
        // Epoch seconds, possibly in scientific notation
        Some(FieldType::Timestamp) if field_type == "TIMESTAMP" => text
            .parse::<f64>()
            .ok()
            .and_then(|secs| {
                DateTime::from_timestamp(secs.trunc() as i64, (secs.fract() * 1e9).round() as u32)
            })
            .map(|moment| Value::from(format_timestamp(moment.naive_utc())))
            .unwrap_or_else(|| Value::from(text)),
        _ => Value::from(text),
    }
}
