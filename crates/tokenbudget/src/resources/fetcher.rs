//! # Rank Fetchers

use std::fs;

use crate::errors::{TBError, TBResult};

/// The transport which fetches raw rank data from a source location.
///
/// Implementations make one attempt; retry policy belongs to the caller.
pub trait RankFetcher: Send + Sync {
    /// Fetch the bytes at `location`.
    ///
    /// ## Returns
    /// The exact bytes, or [`TBError::Fetch`] on transport failure.
    fn fetch(
        &self,
        location: &str,
    ) -> TBResult<Vec<u8>>;
}

/// A [`RankFetcher`] for local paths and `file://` URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileFetcher;

impl RankFetcher for LocalFileFetcher {
    fn fetch(
        &self,
        location: &str,
    ) -> TBResult<Vec<u8>> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        fs::read(path).map_err(|e| TBError::fetch(location, e))
    }
}

#[cfg(feature = "download")]
impl RankFetcher for crate::disk_cache::TokenbudgetDiskCache {
    fn fetch(
        &self,
        location: &str,
    ) -> TBResult<Vec<u8>> {
        self.fetch_bytes(location)
            .map_err(|e| TBError::fetch(location, format!("{e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_local_fetch() {
        let dir = tempdir::TempDir::new("local_fetch").unwrap();
        let path = dir.path().join("ranks.tiktoken");
        fs::File::create(&path)
            .unwrap()
            .write_all(b"IQ== 0\n")
            .unwrap();

        let location = path.to_str().unwrap();
        assert_eq!(LocalFileFetcher.fetch(location).unwrap(), b"IQ== 0\n");
        assert_eq!(
            LocalFileFetcher
                .fetch(&format!("file://{location}"))
                .unwrap(),
            b"IQ== 0\n"
        );

        let missing = dir.path().join("missing").to_str().unwrap().to_string();
        assert!(matches!(
            LocalFileFetcher.fetch(&missing),
            Err(TBError::Fetch { location, .. }) if location == missing
        ));
    }
}
