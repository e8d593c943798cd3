//! # Cache Stores

use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use crate::{errors::TBResult, types::TBHashMap};

/// The cache key for a source location: its lowercase hex SHA-256.
pub fn cache_key(location: &str) -> String {
    content_hash(location.as_bytes())
}

/// The lowercase hex SHA-256 of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Keyed blob storage for fetched rank data.
///
/// Entries are treated as immutable: a key always names the same content,
/// and nothing here expires or invalidates an entry.
pub trait CacheStore: Send + Sync {
    /// Get the bytes stored under `key`, if any.
    ///
    /// Read failures are reported as misses.
    fn get(
        &self,
        key: &str,
    ) -> Option<Vec<u8>>;

    /// Store `bytes` under `key`, replacing any existing entry whole.
    fn put(
        &self,
        key: &str,
        bytes: &[u8],
    ) -> TBResult<()>;
}

/// An in-process [`CacheStore`].
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: Mutex<TBHashMap<String, Vec<u8>>>,
}

impl MemoryCacheStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the entry for `key`, returning it.
    pub fn remove(
        &self,
        key: &str,
    ) -> Option<Vec<u8>> {
        self.entries.lock().remove(key)
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(
        &self,
        key: &str,
    ) -> Option<Vec<u8>> {
        self.entries.lock().get(key).cloned()
    }

    fn put(
        &self,
        key: &str,
        bytes: &[u8],
    ) -> TBResult<()> {
        self.entries.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// A [`CacheStore`] which never stores anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCacheStore;

impl CacheStore for NoCacheStore {
    fn get(
        &self,
        _key: &str,
    ) -> Option<Vec<u8>> {
        None
    }

    fn put(
        &self,
        _key: &str,
        _bytes: &[u8],
    ) -> TBResult<()> {
        Ok(())
    }
}

#[cfg(feature = "download")]
impl CacheStore for crate::disk_cache::TokenbudgetDiskCache {
    fn get(
        &self,
        key: &str,
    ) -> Option<Vec<u8>> {
        match self.read_entry(key) {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("cache read failed for {key}: {err:#}");
                None
            }
        }
    }

    fn put(
        &self,
        key: &str,
        bytes: &[u8],
    ) -> TBResult<()> {
        self.write_entry(key, bytes)
            .map(|_| ())
            .map_err(|e| crate::errors::TBError::Cache(format!("{e:#}")))
    }
}
