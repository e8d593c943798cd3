//! # Vocabulary Resource Loader

use std::sync::Arc;

use crate::{
    errors::{TBError, TBResult},
    pretrained::VocabDescriptor,
    resources::{CacheStore, LocalFileFetcher, NoCacheStore, RankFetcher, cache_key, content_hash},
    types::TokenType,
    vocab::RankTable,
};

/// Cache-first loader of vocabulary rank data.
///
/// A load first consults the [`CacheStore`] under [`cache_key`] of the
/// source location. On a miss the [`RankFetcher`] is called once, the
/// bytes are checked against the descriptor's content hash (when it has
/// one), and then written back to the cache. Cache writes are best-effort:
/// a failed write is logged, and the load still succeeds.
///
/// Concurrent first loads of one source may each fetch; the cache write
/// is a whole-entry replacement, so the last writer wins.
#[derive(Clone)]
pub struct VocabResourceLoader {
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn RankFetcher>,
}

impl core::fmt::Debug for VocabResourceLoader {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("VocabResourceLoader").finish_non_exhaustive()
    }
}

impl Default for VocabResourceLoader {
    /// A loader which reads local files, with no cache.
    fn default() -> Self {
        Self::new(Arc::new(NoCacheStore), Arc::new(LocalFileFetcher))
    }
}

impl VocabResourceLoader {
    /// Create a loader.
    ///
    /// ## Arguments
    /// * `cache` - the cache store.
    /// * `fetcher` - the transport used on cache misses.
    pub fn new(
        cache: Arc<dyn CacheStore>,
        fetcher: Arc<dyn RankFetcher>,
    ) -> Self {
        Self { cache, fetcher }
    }

    /// Create a loader which caches and downloads through one disk cache.
    #[cfg(feature = "download")]
    pub fn from_disk_cache(disk_cache: crate::disk_cache::TokenbudgetDiskCache) -> Self {
        let disk_cache = Arc::new(disk_cache);
        Self::new(disk_cache.clone(), disk_cache)
    }

    /// Create a loader over the default disk cache location.
    ///
    /// See [`DiskCacheOptions`](crate::disk_cache::DiskCacheOptions) for
    /// how the directory is resolved.
    #[cfg(feature = "download")]
    pub fn with_default_disk_cache() -> TBResult<Self> {
        let disk_cache =
            crate::disk_cache::TokenbudgetDiskCache::new(Default::default())
                .map_err(|e| TBError::Cache(format!("{e:#}")))?;
        Ok(Self::from_disk_cache(disk_cache))
    }

    /// Load the raw bytes at `location`, cache-first.
    ///
    /// ## Arguments
    /// * `location` - the source URL or path.
    /// * `expected_hash` - optional lowercase hex SHA-256 of the content;
    ///   checked only on freshly fetched bytes.
    ///
    /// ## Returns
    /// The bytes; or [`TBError::Fetch`] / [`TBError::HashMismatch`] on a miss
    /// which could not be filled.
    pub fn load_bytes(
        &self,
        location: &str,
        expected_hash: Option<&str>,
    ) -> TBResult<Vec<u8>> {
        let key = cache_key(location);

        if let Some(bytes) = self.cache.get(&key) {
            log::debug!("cache hit for {location} ({key})");
            return Ok(bytes);
        }

        log::info!("fetching {location}");
        let bytes = self.fetcher.fetch(location)?;

        if let Some(expected) = expected_hash {
            let found = content_hash(&bytes);
            if !found.eq_ignore_ascii_case(expected) {
                return Err(TBError::HashMismatch {
                    location: location.to_string(),
                    expected: expected.to_string(),
                    found,
                });
            }
        }

        if let Err(err) = self.cache.put(&key, &bytes) {
            log::warn!("failed to cache {location}: {err}");
        }

        Ok(bytes)
    }

    /// Load and decode the rank table for `descriptor`.
    ///
    /// The wire format is selected by [`VocabDescriptor::format`].
    pub fn load_ranks<T: TokenType>(
        &self,
        descriptor: &VocabDescriptor,
    ) -> TBResult<RankTable<T>> {
        let bytes = self.load_bytes(descriptor.source, descriptor.content_hash)?;
        descriptor.format().decode(&bytes)
    }
}
