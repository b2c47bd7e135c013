//! Layered lookup across several wordlist directories

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::wordlist::not_found;
use crate::reader::WordlistReader;
use crate::wordlist_dir::WordlistDir;

/// Ordered wordlist directories, highest priority first
///
/// [`push`](Self::push) puts the new directory in front, so the most
/// recently added directory is searched first. Pushing the same path twice
/// keeps both entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<WordlistDir>,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push each path in order; the last one ends up with the highest priority
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut search_paths = Self::new();
        for path in paths {
            search_paths.push(path);
        }
        search_paths
    }

    /// Add a directory in front of every existing one
    pub fn push(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.dirs.insert(0, WordlistDir::new(path));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordlistDir> {
        self.dirs.iter()
    }

    /// Directory roots in search order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(WordlistDir::path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First match for `name`, checking directories in priority order
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.dirs.iter().find_map(|dir| dir.find(name))
    }

    /// Union of every directory's listing for `pattern`
    pub fn list(&self, pattern: &str) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for dir in &self.dirs {
            names.extend(dir.list(pattern)?);
        }
        Ok(names)
    }

    pub fn open(&self, name: &str) -> Result<WordlistReader> {
        let path = self.find(name).ok_or_else(|| not_found(name))?;
        WordlistReader::open(path)
    }
}

impl<'a> IntoIterator for &'a SearchPaths {
    type Item = &'a WordlistDir;
    type IntoIter = std::slice::Iter<'a, WordlistDir>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter()
    }
}
