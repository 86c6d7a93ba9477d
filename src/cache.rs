use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::{Genre, MovieDetail, MovieSummary};

/// A snapshot older than this is treated as entirely absent.
const SNAPSHOT_MAX_AGE_MS: i64 = 30 * 60 * 1000;

/// Persisted form of the whole cache: one flat record, all sections
/// serialized together. Maps are stored as entry lists to keep the JSON
/// shape stable.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    genres: Option<Vec<Genre>>,
    movies: Vec<(u64, MovieSummary)>,
    details: Vec<(u64, MovieDetail)>,
    timestamp: i64,
}

#[derive(Debug, Default)]
struct CacheInner {
    genres: Option<Vec<Genre>>,
    movies: HashMap<u64, MovieSummary>,
    details: HashMap<u64, MovieDetail>,
}

/// Response cache for genre lists and movie lookups.
///
/// Values are trimmed projections of catalog records, never raw responses.
/// Every mutation rewrites the full snapshot to disk (write-through); expiry
/// is evaluated only when a snapshot is loaded, never per entry.
pub struct SnapshotCache {
    inner: RwLock<CacheInner>,
    path: PathBuf,
}

impl SnapshotCache {
    /// Creates a cold cache that persists to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: RwLock::new(CacheInner::default()),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a cache and warms it from the persisted snapshot if one is
    /// present and fresh.
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let cache = Self::new(path);
        let warm = cache.load_from_storage().await;
        tracing::info!(path = %cache.path.display(), warm, "Cache initialized");
        cache
    }

    /// Replaces the in-memory state from the persisted snapshot.
    ///
    /// Returns false and leaves the cache cold when the file is absent,
    /// unparseable or older than 30 minutes. All of these are non-fatal and
    /// equivalent to "cache miss everywhere".
    pub async fn load_from_storage(&self) -> bool {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return false,
        };

        let snapshot: Snapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt cache snapshot");
                return false;
            }
        };

        if Utc::now().timestamp_millis() - snapshot.timestamp >= SNAPSHOT_MAX_AGE_MS {
            return false;
        }

        let mut inner = self.inner.write().await;
        inner.genres = snapshot.genres;
        inner.movies = snapshot.movies.into_iter().collect();
        inner.details = snapshot.details.into_iter().collect();
        true
    }

    pub async fn genres(&self) -> Option<Vec<Genre>> {
        self.inner.read().await.genres.clone()
    }

    pub async fn put_genres(&self, genres: Vec<Genre>) {
        {
            let mut inner = self.inner.write().await;
            inner.genres = Some(genres);
        }
        self.flush_to_storage().await;
    }

    /// Stores a page of discovered candidates in one write. The discovery
    /// path never reads this section back (a fresh random page is always
    /// fetched); it only rides along in the snapshot.
    pub async fn put_movies(&self, movies: impl IntoIterator<Item = MovieSummary>) {
        {
            let mut inner = self.inner.write().await;
            for movie in movies {
                inner.movies.insert(movie.id, movie);
            }
        }
        self.flush_to_storage().await;
    }

    pub async fn detail(&self, id: u64) -> Option<MovieDetail> {
        self.inner.read().await.details.get(&id).cloned()
    }

    pub async fn put_detail(&self, detail: MovieDetail) {
        {
            let mut inner = self.inner.write().await;
            inner.details.insert(detail.id, detail);
        }
        self.flush_to_storage().await;
    }

    /// Serializes the whole cache to disk with a fresh timestamp.
    /// Persistence failures only cost cache warmth, so they are logged and
    /// swallowed.
    pub async fn flush_to_storage(&self) {
        let snapshot = {
            let inner = self.inner.read().await;
            Snapshot {
                genres: inner.genres.clone(),
                movies: inner.movies.iter().map(|(k, v)| (*k, v.clone())).collect(),
                details: inner.details.iter().map(|(k, v)| (*k, v.clone())).collect(),
                timestamp: Utc::now().timestamp_millis(),
            }
        };

        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Cache snapshot serialization failed");
                return;
            }
        };

        if let Err(e) = tokio::fs::write(&self.path, json).await {
            tracing::error!(error = %e, path = %self.path.display(), "Cache snapshot write failed");
        }
    }
}
