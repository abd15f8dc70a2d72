//! Core utilities for the fantasy football pipeline
//!
//! - `cache`: Two-tier (memory + file system) download cache
//! - `time`: Timestamp and date formatting for warehouse rows

pub mod cache;
pub mod time;

// Re-export commonly used items for convenience
pub use cache::{cache_root, DownloadCache};
pub use time::{format_date, format_timestamp, parse_date, BatchTimestamp};
