//! Wordlists - download, cache and look up security wordlists
//!
//! Wordlists are either single files fetched over HTTP(S) or git
//! repositories cloned with the system `git`. Downloads land in a cache
//! directory tracked by a manifest, and names are resolved across the cache
//! plus any number of system wordlist directories.
//!
//! ```no_run
//! use wordlists::Wordlists;
//!
//! # fn main() -> wordlists::Result<()> {
//! let mut wordlists = Wordlists::new()?;
//! wordlists.download("https://raw.githubusercontent.com/rbsec/dnscan/master/tlds.txt")?;
//!
//! for line in wordlists.open("tlds")? {
//!     println!("{}", line.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod cache_dir;
pub mod catalog;
pub mod config;
pub mod error;
mod git;
mod http;
pub mod manifest;
pub mod reader;
pub mod search_paths;
pub mod wordlist_dir;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use artifact::{Artifact, ArtifactKind, WordlistFile, WordlistRepo};
pub use cache_dir::CacheDir;
pub use catalog::{CatalogEntry, CatalogIndex};
pub use error::{DownloadFailure, Result, WordlistsError};
pub use manifest::{Manifest, WordlistMetadata};
pub use reader::WordlistReader;
pub use search_paths::SearchPaths;
pub use wordlist_dir::WordlistDir;

/// The wordlist cache together with every directory searched for wordlists
///
/// The cache is searched first, then the system directories in the order
/// given.
#[derive(Debug, Clone)]
pub struct Wordlists {
    cache: CacheDir,
    search_paths: SearchPaths,
}

impl Wordlists {
    /// The default cache plus the default system wordlist directories
    pub fn new() -> Result<Self> {
        Ok(Self::with_cache(
            CacheDir::open_default()?,
            config::system_wordlist_dirs(),
        ))
    }

    /// `cache` plus `system_dirs`, highest priority first
    pub fn with_cache<I, P>(cache: CacheDir, system_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let system_dirs: Vec<PathBuf> = system_dirs.into_iter().map(Into::into).collect();

        let mut search_paths = SearchPaths::new();
        for dir in system_dirs.into_iter().rev() {
            search_paths.push(dir);
        }
        search_paths.push(cache.wordlist_dir().path());

        Self {
            cache,
            search_paths,
        }
    }

    pub fn cache(&self) -> &CacheDir {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut CacheDir {
        &mut self.cache
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// Add a directory searched before every other one, the cache included
    pub fn push_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.search_paths.push(path);
        self
    }

    /// Download `url` into the cache
    pub fn download(&mut self, url: &str) -> Result<Artifact> {
        self.cache.download(url)
    }

    /// Path of the first wordlist called `name`
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_paths.find(name)
    }

    /// Every wordlist matching `pattern` across all directories
    pub fn list(&self, pattern: &str) -> Result<BTreeSet<String>> {
        self.search_paths.list(pattern)
    }

    pub fn open(&self, name: &str) -> Result<WordlistReader> {
        self.search_paths.open(name)
    }
}
