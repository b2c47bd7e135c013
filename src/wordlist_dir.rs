//! A directory of wordlists
//!
//! Names resolve either to an exact file under the directory
//! (`passwords.txt`) or, failing that, to the first file anywhere below it
//! whose name is the given name plus a recognized extension (`passwords`).

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::artifact::Artifact;
use crate::config::WORDLIST_EXTENSIONS;
use crate::error::Result;
use crate::error::fs::io_failed;
use crate::error::wordlist::{invalid_pattern, not_found, unknown};
use crate::reader::WordlistReader;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn has_wordlist_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| WORDLIST_EXTENSIONS.contains(&e))
}

/// Path relative to `root` with forward slashes
fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A directory searched for wordlist files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistDir {
    path: PathBuf,
}

impl WordlistDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every wordlist file below the directory, in file name order
    ///
    /// Hidden files and directories (such as `.git`) are skipped. A missing
    /// directory yields nothing.
    pub fn iter(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(DirEntry::into_path)
            .filter(|p| has_wordlist_extension(p))
    }

    /// Resolve `name` to a wordlist file
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let exact = self.path.join(name);
        if exact.is_file() {
            return Some(exact);
        }

        let candidates: Vec<String> = WORDLIST_EXTENSIONS
            .iter()
            .map(|ext| format!("{name}.{ext}"))
            .collect();

        self.iter().find(|path| {
            let relative = relative_name(&self.path, path);
            candidates
                .iter()
                .any(|c| relative == *c || relative.ends_with(&format!("/{c}")))
        })
    }

    /// Relative paths of the wordlists whose name matches `pattern`
    ///
    /// `pattern` is a glob (`*`, `?`) matched case-sensitively against file
    /// names with the extension removed; `"*"` lists everything.
    pub fn list(&self, pattern: &str) -> Result<BTreeSet<String>> {
        let expression = format!("{pattern}.{{{}}}", WORDLIST_EXTENSIONS.join(","));
        let glob = Glob::new(&expression).map_err(|e| invalid_pattern(pattern, e))?;

        Ok(self
            .iter()
            .filter(|path| {
                let basename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                glob.matched(&CandidatePath::from(basename.as_str())).is_some()
            })
            .map(|path| relative_name(&self.path, &path))
            .collect())
    }

    /// Open the wordlist called `name` for reading
    pub fn open(&self, name: &str) -> Result<WordlistReader> {
        let path = self.find(name).ok_or_else(|| not_found(name))?;
        WordlistReader::open(path)
    }

    /// Download `url` into the directory, creating it if needed
    pub fn download(&self, url: &str) -> Result<Artifact> {
        fs::create_dir_all(&self.path)
            .map_err(|e| io_failed("create directory", &self.path, e))?;

        debug!(url, dir = %self.path.display(), "downloading wordlist");
        Artifact::download(url, &self.path)
    }

    /// Delete the wordlist called `name`, returning its former path
    pub fn delete(&self, name: &str) -> Result<PathBuf> {
        let path = self.find(name).ok_or_else(|| unknown(name))?;
        fs::remove_file(&path).map_err(|e| io_failed("delete", &path, e))?;

        info!(path = %path.display(), "deleted wordlist");
        Ok(path)
    }
}
