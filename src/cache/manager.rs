//! Cache manager for persisting menu payloads to disk
//!
//! Provides a `CacheManager` that stores raw payloads as small JSON files with
//! the time they were written, supporting stale-serving when the endpoint is
//! unavailable.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

/// File name prefix shared by every cache entry
const KEY_PREFIX: &str = "menuCache_";

/// Default freshness window in hours
pub const DEFAULT_TTL_HOURS: u64 = 24;

/// Errors that can occur when writing the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Directory creation, write or rename failed
    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Entry could not be serialized
    #[error("Failed to encode cache entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A cached payload as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The raw payload
    pub data: String,
    /// When the payload was written, in epoch milliseconds
    pub timestamp: i64,
}

/// Manages reading and writing cached payloads on disk
///
/// Entries live in an XDG-compliant cache directory (`~/.cache/gamemenu/` on
/// Linux), one file per key. Stale entries are never deleted; they are only
/// replaced by the next successful write for the same key.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
    /// How long an entry stays fresh
    ttl: Duration,
}

impl CacheManager {
    /// Creates a new CacheManager using the XDG cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "gamemenu")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a new CacheManager with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            ttl: Duration::hours(DEFAULT_TTL_HOURS as i64),
        }
    }

    /// Overrides the freshness window
    pub fn with_ttl_hours(mut self, hours: u64) -> Self {
        self.ttl = Duration::hours(hours.min(i64::MAX as u64 / 3_600_000) as i64);
        self
    }

    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}{}.json", KEY_PREFIX, urlencoding::encode(key)))
    }

    /// Reads an entry regardless of its age
    ///
    /// Missing, unreadable and corrupt entries all read as `None`.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let content = fs::read_to_string(self.cache_path(key)).ok()?;
        match serde_json::from_str(&content) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring corrupt cache entry");
                None
            }
        }
    }

    /// Writes `data` under `key`, stamped with the current time
    pub fn put(&self, key: &str, data: &str) -> Result<(), CacheError> {
        self.put_at(key, data, Utc::now())
    }

    /// Writes `data` under `key` with an explicit timestamp
    ///
    /// The entry is written to a temporary file in the cache directory and
    /// renamed into place, so readers never observe a partial entry.
    pub fn put_at(&self, key: &str, data: &str, at: DateTime<Utc>) -> Result<(), CacheError> {
        fs::create_dir_all(&self.cache_dir)?;

        let entry = CacheEntry {
            data: data.to_string(),
            timestamp: at.timestamp_millis(),
        };
        let json = serde_json::to_string(&entry)?;

        // Each write gets its own temp file; the last rename wins
        let mut tmp = NamedTempFile::new_in(&self.cache_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.cache_path(key)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Whether `key` is absent or older than the TTL
    pub fn is_stale(&self, key: &str) -> bool {
        match self.get(key) {
            Some(entry) => self.is_entry_stale(&entry, Utc::now()),
            None => true,
        }
    }

    /// Whether `entry` is older than the TTL at `now`
    pub fn is_entry_stale(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now.timestamp_millis().saturating_sub(entry.timestamp) > self.ttl.num_milliseconds()
    }
}
