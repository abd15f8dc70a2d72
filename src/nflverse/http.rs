//! HTTP access to the public nflverse releases.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use super::source::{Dataset, NflDataSource};
use crate::{core::cache::DownloadCache, Result};


/// Root of the nflverse-data GitHub releases.
pub const RELEASES_BASE_URL: &str = "https://github.com/nflverse/nflverse-data/releases/download";

/// Schedule with results, odds and stadiums for every season.
pub const SCHEDULES_URL: &str = "https://raw.githubusercontent.com/nflverse/nfldata/master/data/games.csv";

/// Where each dataset is downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NflverseUrls {
    pub releases: String,
    pub schedules: String,
}

impl Default for NflverseUrls {
    fn default() -> Self {
        Self {
            releases: RELEASES_BASE_URL.to_string(),
            schedules: SCHEDULES_URL.to_string(),
        }
    }
}

impl NflverseUrls {
    pub fn url_for(&self, dataset: Dataset) -> String {
        match dataset.release_path() {
            Some(path) => format!("{}/{}", self.releases.trim_end_matches('/'), path),
            None => self.schedules.clone(),
        }
    }
}

/// Downloads nflverse files, serving repeats from the [`DownloadCache`].
pub struct HttpSource {
    client: Client,
    urls: NflverseUrls,
    cache: DownloadCache,
    refresh: bool,
}

impl HttpSource {
    pub fn new(urls: NflverseUrls, cache: DownloadCache, refresh: bool) -> Self {
        let client = Client::builder()
            .user_agent(concat!("fantasy-football/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            client,
            urls,
            cache,
            refresh,
        }
    }

    /// Public releases with the default on-disk cache.
    pub fn with_defaults(refresh: bool) -> Self {
        Self::new(NflverseUrls::default(), DownloadCache::default_location(), refresh)
    }
}

#[async_trait]
impl NflDataSource for HttpSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Arc<Vec<u8>>> {
        let url = self.urls.url_for(dataset);

        let keep_in_memory = dataset.read_repeatedly();

        if !self.refresh {
            let hit = if keep_in_memory {
                self.cache.get(&url)
            } else {
                self.cache.get_from_disk(&url)
            };
            if let Some(hit) = hit {
                tracing::debug!("Cache hit for {}", url);
                return Ok(hit);
            }
        }

        tracing::info!("Downloading {}", url);
        let bytes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        tracing::debug!("Downloaded {} bytes from {}", bytes.len(), url);

        if keep_in_memory {
            Ok(self.cache.put(&url, bytes.to_vec()))
        } else {
            Ok(self.cache.put_on_disk(&url, bytes.to_vec()))
        }
    }

    fn describe(&self) -> String {
        format!("nflverse releases at {}", self.urls.releases)
    }
}
