//! Two-tier download cache for nflverse release files
//!
//! - L1 Cache: In-memory LRU cache for the current process (a full `update all`
//!   reads each weekly stats file twice)
//! - L2 Cache: File system persistence under the user cache directory
//!
//! Play-by-play files are read once per run and go through the disk tier only.
//!
//! Entries are keyed by source URL. A refresh bypasses both tiers on read and
//! rewrites them on store.

use lru::LruCache;
use std::{
    fs,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

const MEMORY_CAPACITY: usize = 8;

/// Path: ~/.cache/fantasy-football
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fantasy-football")
}

/// Try to read a file into bytes
pub fn try_read_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut f = fs::File::open(path).ok()?;
    let mut buf = Vec::new();

    f.read_to_end(&mut buf).ok()?;

    Some(buf)
}

/// Write bytes to file, creating parent directories
pub fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents)
}

/// Map a URL to a stable file name: every non-alphanumeric byte becomes `_`.
pub fn url_to_file_key(url: &str) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
        .collect()
}

pub struct DownloadCache {
    memory: Mutex<LruCache<String, Arc<Vec<u8>>>>,
    dir: PathBuf,
}

impl DownloadCache {
    /// Cache backed by memory and `dir` on disk.
    pub fn new(dir: PathBuf) -> Self {
        Self {
            memory: Mutex::new(LruCache::new(memory_capacity())),
            dir,
        }
    }

    /// Default on-disk location: ~/.cache/fantasy-football/nflverse
    pub fn default_location() -> Self {
        Self::new(cache_root().join("nflverse"))
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(url_to_file_key(key))
    }

    /// Look up an entry, promoting disk hits into memory.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        if let Ok(mut memory) = self.memory.lock() {
            if let Some(hit) = memory.get(key) {
                return Some(Arc::clone(hit));
            }
        }

        let bytes = self.get_from_disk(key)?;
        if let Ok(mut memory) = self.memory.lock() {
            memory.put(key.to_string(), Arc::clone(&bytes));
        }
        Some(bytes)
    }

    /// Look up an entry on disk only, leaving the memory tier alone.
    pub fn get_from_disk(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        try_read_bytes(&self.file_path(key)).map(Arc::new)
    }

    /// Store an entry in both tiers. Disk failures are logged, not returned.
    pub fn put(&self, key: &str, bytes: Vec<u8>) -> Arc<Vec<u8>> {
        let bytes = self.put_on_disk(key, bytes);
        if let Ok(mut memory) = self.memory.lock() {
            memory.put(key.to_string(), Arc::clone(&bytes));
        }
        bytes
    }

    /// Store an entry on disk only.
    pub fn put_on_disk(&self, key: &str, bytes: Vec<u8>) -> Arc<Vec<u8>> {
        let path = self.file_path(key);
        if let Err(e) = write_bytes(&path, &bytes) {
            tracing::warn!("Could not write download cache {}: {}", path.display(), e);
        }
        Arc::new(bytes)
    }

    #[cfg(test)]
    fn in_memory(&self, key: &str) -> bool {
        self.memory.lock().is_ok_and(|memory| memory.contains(key))
    }
}

fn memory_capacity() -> NonZeroUsize {
    NonZeroUsize::new(MEMORY_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}
