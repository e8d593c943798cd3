//! # Tokenbudget Disk Cache

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};
use parking_lot::Mutex;

use crate::{TOKENBUDGET_CACHE_CONFIG, path_utils};

/// Options for [`TokenbudgetDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct DiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl DiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Flat, key-addressed disk cache for downloaded vocabulary files.
///
/// Leverages [`Downloader`] for fetching remote files,
/// and [`PathResolver`](`crate::path_resolver::PathResolver`) for resolving
/// the cache path appropriate for a user/system combo, and any environment overrides.
///
/// The downloader is built lazily on the first remote fetch; a cache which
/// only serves hits never touches the network stack.
pub struct TokenbudgetDiskCache {
    /// Cache directory.
    cache_dir: PathBuf,

    /// Optional user downloader builder.
    downloader_builder: Option<fn() -> Downloader>,

    /// The idle downloader, if one has been built.
    downloader: Mutex<Option<Downloader>>,
}

impl std::fmt::Debug for TokenbudgetDiskCache {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("TokenbudgetDiskCache")
            .field("cache_dir", &self.cache_dir)
            .finish_non_exhaustive()
    }
}

impl TokenbudgetDiskCache {
    /// Construct a new [`TokenbudgetDiskCache`].
    ///
    /// Does not create the cache directory.
    pub fn new(options: DiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = TOKENBUDGET_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        Ok(Self {
            cache_dir,
            downloader_builder: options.downloader,
            downloader: Mutex::new(None),
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the path of the entry for `key`.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn entry_path(
        &self,
        key: &str,
    ) -> PathBuf {
        self.cache_dir.join(key)
    }

    /// Read the entry for `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(bytes))` on a hit.
    /// * `Ok(None)` if there is no such entry.
    /// * `Err` on any other read failure.
    pub fn read_entry(
        &self,
        key: &str,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        let path = self.entry_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Replace the entry for `key` with `bytes`, as a whole file.
    ///
    /// ## Returns
    /// The path of the written entry.
    pub fn write_entry(
        &self,
        key: &str,
        bytes: &[u8],
    ) -> anyhow::Result<PathBuf> {
        let path = self.entry_path(key);
        path_utils::replace_file(&path, bytes)?;
        Ok(path)
    }

    /// Fetch the bytes at `location`.
    ///
    /// `http://` and `https://` locations are downloaded, exactly once
    /// (no retries), into a staging file in the cache directory which is
    /// removed after reading. Everything else is read as a local path,
    /// with an optional `file://` prefix.
    ///
    /// Does not consult or populate cache entries.
    pub fn fetch_bytes(
        &self,
        location: &str,
    ) -> anyhow::Result<Vec<u8>> {
        if path_utils::is_remote_url(location) {
            self.download_bytes(location)
        } else {
            let path = path_utils::local_path(location);
            fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
        }
    }

    /// Download `url` and return its bytes.
    pub fn download_bytes(
        &self,
        url: &str,
    ) -> anyhow::Result<Vec<u8>> {
        fs::create_dir_all(&self.cache_dir)
            .with_context(|| format!("failed to create {}", self.cache_dir.display()))?;

        let staging = path_utils::staging_path(&self.entry_path("download"));
        let mut dl = Download::new(url);
        dl.file_name = staging.clone();

        let outcome = self.download(dl).and_then(|()| {
            fs::read(&staging).with_context(|| format!("failed to read {}", staging.display()))
        });
        let _ = fs::remove_file(&staging);

        outcome.with_context(|| format!("failed to download {url}"))
    }

    /// Run one download.
    ///
    /// The idle downloader is checked out of its slot for the duration;
    /// concurrent downloads build their own, and the slot keeps one.
    fn download(
        &self,
        dl: Download,
    ) -> anyhow::Result<()> {
        let idle = self.downloader.lock().take();
        let mut downloader = match idle {
            Some(downloader) => downloader,
            None => self.build_downloader()?,
        };

        let outcome = downloader.download(&[dl]);

        let mut slot = self.downloader.lock();
        if slot.is_none() {
            *slot = Some(downloader);
        }
        drop(slot);

        for summary in outcome? {
            summary?;
        }
        Ok(())
    }

    fn build_downloader(&self) -> anyhow::Result<Downloader> {
        Ok(match self.downloader_builder {
            Some(builder) => builder(),
            None => Downloader::builder()
                .download_folder(&self.cache_dir)
                .retries(0)
                .build()?,
        })
    }
}
