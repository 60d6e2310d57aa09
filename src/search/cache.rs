//! On-disk cache for CN code list files.
//!
//! Concurrent writers are not coordinated; the last write wins.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use log::{debug, warn};

use crate::core::{TedbConfig, TedbError};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A directory of cached JSON files with a maximum age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCache {
    dir: PathBuf,
    create_dir: bool,
    max_age: Duration,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>, create_dir: bool, max_age_days: u32) -> Self {
        Self {
            dir: dir.into(),
            create_dir,
            max_age: Duration::from_secs(u64::from(max_age_days) * SECONDS_PER_DAY),
        }
    }

    /// The cache described by `config`, if it names a directory.
    pub fn from_config(config: &TedbConfig) -> Option<Self> {
        config.get_cache_dir().map(|dir| {
            Self::new(
                dir,
                config.creates_cache_dir(),
                config.get_cache_max_age_days(),
            )
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Contents of `name`, or `None` if it is missing, empty or stale.
    pub fn read(&self, name: &str) -> Result<Option<Vec<u8>>, TedbError> {
        let path = self.path(name);
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!("cache miss: {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(cache_error(&path, e)),
        };

        if meta.len() == 0 {
            debug!("cache entry empty: {}", path.display());
            return Ok(None);
        }

        let modified = meta.modified().map_err(|e| cache_error(&path, e))?;
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        if age > self.max_age {
            debug!(
                "cache entry stale ({} days old): {}",
                age.as_secs() / SECONDS_PER_DAY,
                path.display()
            );
            return Ok(None);
        }

        debug!("cache hit: {}", path.display());
        fs::read(&path).map(Some).map_err(|e| cache_error(&path, e))
    }

    /// Store `contents` under `name`.
    ///
    /// When the directory is missing and may not be created, the write is
    /// skipped with a warning.
    pub fn write(&self, name: &str, contents: &[u8]) -> Result<(), TedbError> {
        if !self.dir.is_dir() {
            if !self.create_dir {
                warn!(
                    "cache directory {} does not exist; not caching {name}",
                    self.dir.display()
                );
                return Ok(());
            }
            fs::create_dir_all(&self.dir).map_err(|e| cache_error(&self.dir, e))?;
        }

        let path = self.path(name);
        fs::write(&path, contents).map_err(|e| cache_error(&path, e))?;
        debug!("cached {} bytes at {}", contents.len(), path.display());
        Ok(())
    }
}

fn cache_error(path: &Path, err: std::io::Error) -> TedbError {
    TedbError::Cache {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
