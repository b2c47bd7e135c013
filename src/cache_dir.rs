//! The wordlist cache
//!
//! A cache directory holds `manifest.yml` and a `wordlists/` directory with
//! one file or git working copy per downloaded wordlist. Artifacts are
//! written before their manifest entry and deleted before the entry is
//! dropped, so the manifest never points at something that was not
//! downloaded.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifact::Artifact;
use crate::config::{self, MANIFEST_FILE, WORDLISTS_DIR};
use crate::error::Result;
use crate::error::fs::io_failed;
use crate::error::wordlist::not_downloaded;
use crate::manifest::{Manifest, WordlistMetadata};
use crate::reader::WordlistReader;
use crate::wordlist_dir::WordlistDir;

/// A cache directory of downloaded wordlists
#[derive(Debug, Clone)]
pub struct CacheDir {
    path: PathBuf,
    manifest: Manifest,
    wordlist_dir: WordlistDir,
}

impl CacheDir {
    /// Open the cache rooted at `path`, reading its manifest
    ///
    /// Nothing is created on disk until the first download.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let manifest = Manifest::load(path.join(MANIFEST_FILE))?;
        let wordlist_dir = WordlistDir::new(path.join(WORDLISTS_DIR));

        Ok(Self {
            path,
            manifest,
            wordlist_dir,
        })
    }

    /// Open the cache at the default location
    pub fn open_default() -> Result<Self> {
        Self::new(config::cache_dir()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The directory holding the downloaded wordlists
    pub fn wordlist_dir(&self) -> &WordlistDir {
        &self.wordlist_dir
    }

    /// Whether a wordlist called `name` has been downloaded
    pub fn contains(&self, name: &str) -> bool {
        self.manifest.contains(name)
    }

    pub fn len(&self) -> usize {
        self.manifest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }

    /// The downloaded wordlist called `name`
    pub fn resolve(&self, name: &str) -> Result<Artifact> {
        let metadata = self.manifest.get(name)?.ok_or_else(|| not_downloaded(name))?;
        let path = self.wordlist_dir.path().join(&metadata.filename);

        Ok(Artifact::new(metadata.kind, path, metadata.url))
    }

    /// Every downloaded wordlist, in the order they were downloaded
    pub fn iter(&self) -> impl Iterator<Item = Result<Artifact>> + '_ {
        self.manifest.names().map(|name| self.resolve(name))
    }

    /// Wordlist files in the cache whose name matches `pattern`
    pub fn list(&self, pattern: &str) -> Result<BTreeSet<String>> {
        self.wordlist_dir.list(pattern)
    }

    pub fn open(&self, name: &str) -> Result<WordlistReader> {
        self.wordlist_dir.open(name)
    }

    /// Download `url` into the cache and record it in the manifest
    pub fn download(&mut self, url: &str) -> Result<Artifact> {
        let artifact = self.wordlist_dir.download(url)?;
        let metadata = WordlistMetadata {
            kind: artifact.kind(),
            url: Some(url.to_string()),
            filename: artifact.filename(),
        };

        self.manifest
            .transaction(|entries| entries.insert(artifact.name(), &metadata))?;

        info!(name = artifact.name(), kind = %metadata.kind, url, "added wordlist to cache");
        Ok(artifact)
    }

    /// Update every downloaded wordlist, stopping at the first failure
    pub fn update(&self) -> Result<()> {
        for artifact in self.iter() {
            artifact?.update()?;
        }
        Ok(())
    }

    /// Delete the wordlist called `name` and drop it from the manifest
    pub fn remove(&mut self, name: &str) -> Result<Artifact> {
        let artifact = self.resolve(name)?;
        artifact.delete()?;

        self.manifest.transaction(|entries| {
            entries.remove(name);
            Ok(())
        })?;

        info!(name, path = %artifact.path().display(), "removed wordlist from cache");
        Ok(artifact)
    }

    /// Delete the whole cache directory, manifest included
    pub fn purge(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_dir_all(&self.path).map_err(|e| io_failed("delete", &self.path, e))?;
        }
        self.manifest.clear();

        info!(path = %self.path.display(), "purged wordlist cache");
        Ok(())
    }
}
