//! Timestamp and date formatting for warehouse rows.

use chrono::{Local, NaiveDate, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input date layouts seen in nflverse files.
const DATE_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// `created_at` / `updated_at` shared by every row of one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchTimestamp(String);

impl BatchTimestamp {
    pub fn now() -> Self {
        Self(format_timestamp(Local::now().naive_local()))
    }

    pub fn at(moment: NaiveDateTime) -> Self {
        Self(format_timestamp(moment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn format_timestamp(moment: NaiveDateTime) -> String {
    moment.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a loosely formatted date; anything unparseable is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // Datetime strings: keep the date part
    let raw = raw.split(['T', ' ']).next().unwrap_or(raw);
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
