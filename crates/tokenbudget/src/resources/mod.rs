//! # Vocabulary Resources
//!
//! Cache-first loading of raw rank data, and decoding it into a [`RankTable`].
//!
//! * [`CacheStore`] - keyed blob storage; see [`MemoryCacheStore`], [`NoCacheStore`].
//! * [`RankFetcher`] - the transport; see [`LocalFileFetcher`].
//! * [`RankFileFormat`] - one decoder per wire format.
//! * [`VocabResourceLoader`] - ties them together.
//!
//! With the `download` feature, [`TokenbudgetDiskCache`](crate::disk_cache::TokenbudgetDiskCache)
//! implements both [`CacheStore`] and [`RankFetcher`].
//!
//! [`RankTable`]: crate::vocab::RankTable

mod cache_store;
mod fetcher;
mod rank_format;
mod rank_loader;

pub use cache_store::{CacheStore, MemoryCacheStore, NoCacheStore, cache_key, content_hash};
pub use fetcher::{LocalFileFetcher, RankFetcher};
pub use rank_format::RankFileFormat;
pub use rank_loader::VocabResourceLoader;
