//! # Path Utilities

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::Context;

static STAGING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Is `location` an `http://` or `https://` URL?
pub fn is_remote_url(location: &str) -> bool {
    location.starts_with("https://") || location.starts_with("http://")
}

/// Convert a non-remote location to a filesystem path.
///
/// Strips a leading `file://` scheme, if present.
pub fn local_path(location: &str) -> PathBuf {
    PathBuf::from(location.strip_prefix("file://").unwrap_or(location))
}

/// A staging path next to `target`, unique within this process.
///
/// Staging files live in the same directory as their target,
/// so the final rename never crosses a filesystem.
///
/// * Does not check that the path exists.
/// * Does not initialize the containing directories.
pub fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let seq = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
    target.with_file_name(format!(".{name}.{}.{seq}.partial", process::id()))
}

/// Replace `target` with `bytes` as a whole file.
///
/// Writes a staging file, syncs it, and renames it over `target`.
/// Concurrent writers each rename a complete file; the last rename wins.
///
/// # Arguments
/// * `target` - the final path; its parent directory is created if missing.
/// * `bytes` - the complete file contents.
pub fn replace_file(
    target: &Path,
    bytes: &[u8],
) -> anyhow::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let staging = staging_path(target);
    let written = (|| -> anyhow::Result<()> {
        let mut file = fs::File::create(&staging)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&staging, target)?;
        Ok(())
    })();

    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written.with_context(|| format!("failed to write {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote_url() {
        assert!(is_remote_url("https://example.com/a.tiktoken"));
        assert!(is_remote_url("http://example.com/a.tiktoken"));
        assert!(!is_remote_url("file:///tmp/a.tiktoken"));
        assert!(!is_remote_url("/tmp/a.tiktoken"));
    }

    #[test]
    fn test_local_path() {
        assert_eq!(
            local_path("file:///tmp/a.tiktoken"),
            PathBuf::from("/tmp/a.tiktoken")
        );
        assert_eq!(local_path("rel/a.bpe"), PathBuf::from("rel/a.bpe"));
    }

    #[test]
    fn test_staging_path() {
        let target = PathBuf::from("/tmp/cache/abc123");
        let a = staging_path(&target);
        let b = staging_path(&target);

        assert_ne!(a, b);
        assert_eq!(a.parent(), target.parent());
        assert!(a.file_name().unwrap().to_str().unwrap().starts_with(".abc123."));
    }

    #[test]
    fn test_replace_file() {
        let dir = tempdir::TempDir::new("replace_file").unwrap();
        let target = dir.path().join("nested").join("entry");

        replace_file(&target, b"first").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"first");

        replace_file(&target, b"second").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");

        let leftovers = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".partial")
            })
            .count();
        assert_eq!(leftovers, 0);
    }
}
