//! # tokenbudget-disk-cache
//!
//! A flat, content-addressed disk cache for vocabulary rank files,
//! and the HTTP fetch path which fills it.
//!
//! Entries live directly under one cache directory; the file name is
//! the caller's key (`tokenbudget` uses the lowercase hex SHA-256 of the
//! source location). Entries are written whole, through a staging file
//! which is renamed over the final path, so racing writers never expose
//! a partial entry.
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{DiskCacheOptions, TokenbudgetDiskCache};

/// Environment variable key to override the default cache directory.
pub const TOKENBUDGET_CACHE_DIR: &str = "TOKENBUDGET_CACHE_DIR";

/// Default [`PathResolver`] for tokenbudget.
pub const TOKENBUDGET_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.tokenbudget",
    organization: "",
    application: "tokenbudget",
    cache_env_vars: &[TOKENBUDGET_CACHE_DIR],
};
