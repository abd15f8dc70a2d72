//! nflverse data releases: raw record types, data sources and HTTP access.

pub mod http;
pub mod source;
pub mod types;

pub use http::{HttpSource, NflverseUrls};
pub use source::{Dataset, LocalDirSource, NflDataSource, NflDataSourceExt};
pub use types::{RawGame, RawPlay, RawPlayer, RawWeeklyStat};
