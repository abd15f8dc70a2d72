//! Data source abstraction over the nflverse release files.

use std::{io::Read, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use super::types::{RawGame, RawPlay, RawPlayer, RawWeeklyStat};
use crate::{
    cli::types::Season,
    error::{PipelineError, Result},
};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One downloadable nflverse file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Players,
    Schedules,
    WeeklyStats(Season),
    PlayByPlay(Season),
}

impl Dataset {
    /// File name as published (and as expected in a local data directory).
    pub fn file_name(&self) -> String {
        match self {
            Dataset::Players => "players.csv".to_string(),
            Dataset::Schedules => "games.csv".to_string(),
            Dataset::WeeklyStats(season) => format!("player_stats_{}.csv", season),
            Dataset::PlayByPlay(season) => format!("play_by_play_{}.csv.gz", season),
        }
    }

    /// Path below the nflverse-data releases root.
    pub fn release_path(&self) -> Option<String> {
        match self {
            Dataset::Players => Some(format!("players/{}", self.file_name())),
            // The schedule lives outside the releases
            Dataset::Schedules => None,
            Dataset::WeeklyStats(_) => Some(format!("player_stats/{}", self.file_name())),
            Dataset::PlayByPlay(_) => Some(format!("pbp/{}", self.file_name())),
        }
    }

    /// Whether a downloaded copy is worth keeping in memory for the rest of the run.
    pub fn read_repeatedly(&self) -> bool {
        !matches!(self, Dataset::PlayByPlay(_))
    }
}

/// Anything that can hand out the raw bytes of an nflverse file.
#[async_trait]
pub trait NflDataSource: Send + Sync {
    async fn fetch(&self, dataset: Dataset) -> Result<Arc<Vec<u8>>>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Typed readers on top of [`NflDataSource::fetch`].
#[async_trait]
pub trait NflDataSourceExt: NflDataSource {
    async fn players(&self) -> Result<Vec<RawPlayer>> {
        parse_in_background(self.fetch(Dataset::Players).await?).await
    }

    /// Schedule rows restricted to `seasons`.
    async fn schedules(&self, seasons: &[Season]) -> Result<Vec<RawGame>> {
        let all: Vec<RawGame> = parse_in_background(self.fetch(Dataset::Schedules).await?).await?;
        Ok(all
            .into_iter()
            .filter(|g| g.season.is_some_and(|s| seasons.contains(&Season::new(s))))
            .collect())
    }

    async fn weekly_stats(&self, season: Season) -> Result<Vec<RawWeeklyStat>> {
        parse_in_background(self.fetch(Dataset::WeeklyStats(season)).await?).await
    }

    /// Field goal and extra point attempts of one season.
    async fn kicking_plays(&self, season: Season) -> Result<Vec<RawPlay>> {
        let plays: Vec<RawPlay> =
            parse_in_background(self.fetch(Dataset::PlayByPlay(season)).await?).await?;
        Ok(plays.into_iter().filter(RawPlay::is_kick).collect())
    }
}

impl<T: NflDataSource + ?Sized> NflDataSourceExt for T {}

/// Parse CSV bytes (optionally gzip-compressed) into typed rows.
pub fn parse_csv<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let reader: Box<dyn Read + '_> = if bytes.starts_with(&GZIP_MAGIC) {
        Box::new(GzDecoder::new(bytes))
    } else {
        Box::new(bytes)
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Play-by-play files run to hundreds of megabytes; keep parsing off the runtime threads.
async fn parse_in_background<T>(bytes: Arc<Vec<u8>>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    tokio::task::spawn_blocking(move || parse_csv(&bytes)).await?
}

/// Reads release files from a local directory using the published file names.
///
/// Play-by-play may be stored compressed (`.csv.gz`) or plain (`.csv`).
#[derive(Debug, Clone)]
pub struct LocalDirSource {
    dir: PathBuf,
}

impl LocalDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn candidates(&self, dataset: Dataset) -> Vec<PathBuf> {
        let name = dataset.file_name();
        let mut paths = vec![self.dir.join(&name)];
        if let Some(plain) = name.strip_suffix(".gz") {
            paths.push(self.dir.join(plain));
        }
        paths
    }
}

#[async_trait]
impl NflDataSource for LocalDirSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Arc<Vec<u8>>> {
        let candidates = self.candidates(dataset);
        for path in &candidates {
            if path.exists() {
                tracing::debug!("Reading {}", path.display());
                return Ok(Arc::new(tokio::fs::read(path).await?));
            }
        }

        Err(PipelineError::NotFound {
            resource: candidates[0].display().to_string(),
        })
    }

    fn describe(&self) -> String {
        format!("local directory {}", self.dir.display())
    }
}
