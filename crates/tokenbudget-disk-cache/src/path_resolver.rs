//! # Cache Path Resolver
//!
//! Static library defaults for cache directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Static configuration for cache directory resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// Environment variables consulted for the cache directory; in priority order.
    pub cache_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// The first set, non-empty, cache environment variable; if any.
    pub fn env_cache_dir(&self) -> Option<PathBuf> {
        self.cache_env_vars
            .iter()
            .filter_map(|var| env::var_os(var))
            .find(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Resolve the cache directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.cache_env_vars`; in order.
    /// 3. `self.project_dirs().cache_dir()`, if present.
    /// 4. `None`
    ///
    /// | Platform | Example                                              |
    /// | -------- | ---------------------------------------------------- |
    /// | Linux    | /home/alice/.cache/tokenbudget                       |
    /// | macOS    | /Users/Alice/Library/Caches/io.crates.tokenbudget    |
    /// | Windows  | C:\Users\Alice\AppData\Local\tokenbudget\cache       |
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        path.map(|p| p.as_ref().to_path_buf())
            .or_else(|| self.env_cache_dir())
            .or_else(|| {
                self.project_dirs()
                    .map(|pds| pds.cache_dir().to_path_buf())
            })
    }
}
