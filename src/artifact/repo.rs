//! Git repositories of wordlists

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use tracing::{info, warn};

use super::{parse_url, url_basename};
use crate::error::Result;
use crate::error::download::invalid_url;
use crate::error::fs::io_failed;
use crate::git;

/// Directory name for a cloned repository: the last URL segment minus one `.git`
fn repository_name(url: &Url) -> Option<&str> {
    let basename = url_basename(url)?;
    let name = basename.strip_suffix(".git").unwrap_or(basename);
    (!name.is_empty()).then_some(name)
}

/// A wordlist directory cloned from a git repository
///
/// The URL, when not recorded anywhere else, is read lazily from the
/// working copy's `remote.origin.url` the first time it is asked for.
#[derive(Debug, Clone)]
pub struct WordlistRepo {
    path: PathBuf,
    name: String,
    url: OnceCell<Option<String>>,
}

impl PartialEq for WordlistRepo {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.url.get() == other.url.get()
    }
}

impl WordlistRepo {
    pub fn new(path: impl Into<PathBuf>, url: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let cell = OnceCell::new();
        if url.is_some() {
            let _ = cell.set(url);
        }

        Self {
            path,
            name,
            url: cell,
        }
    }

    /// Shallow-clone `url` into `dest_dir/<repository name>`
    pub fn download(url: &str, dest_dir: &Path) -> Result<Self> {
        let parsed = parse_url(url)?;
        let basename = repository_name(&parsed)
            .ok_or_else(|| invalid_url(url, "URL has no repository name"))?;

        let path = dest_dir.join(basename);
        git::clone_shallow(url, &path)?;
        info!(url, path = %path.display(), "cloned wordlist repository");

        Ok(Self::new(path, Some(url.to_string())))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory name of the working copy
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> String {
        self.name.clone()
    }

    /// Whether the directory is a git working copy
    pub fn is_git(&self) -> bool {
        self.path.join(".git").is_dir()
    }

    fn resolve_url(&self) -> Result<Option<String>> {
        if !self.is_git() {
            return Ok(None);
        }
        git::remote_url(&self.path)
    }

    /// Source URL, read from the git configuration if not already known
    ///
    /// Directories that are not git working copies have no URL. Failing to
    /// run `git` is an error and is not cached, so a later call tries again.
    pub fn try_url(&self) -> Result<Option<&str>> {
        if let Some(url) = self.url.get() {
            return Ok(url.as_deref());
        }

        let resolved = self.resolve_url()?;
        Ok(self.url.get_or_init(|| resolved).as_deref())
    }

    /// Lossy form of [`try_url`](Self::try_url) that logs failures and returns `None`
    pub fn url(&self) -> Option<&str> {
        self.try_url().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "could not read repository remote");
            None
        })
    }

    /// Pull the latest commits when the directory is a git working copy
    pub fn update(&self) -> Result<()> {
        if !self.is_git() {
            return Ok(());
        }

        git::pull(&self.path)?;
        info!(path = %self.path.display(), "updated wordlist repository");
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        fs::remove_dir_all(&self.path).map_err(|e| io_failed("delete", &self.path, e))?;
        info!(path = %self.path.display(), "deleted wordlist repository");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_directory_is_not_git() {
        let temp = tempfile::TempDir::new().unwrap();
        let repo = WordlistRepo::new(temp.path(), None);

        assert!(!repo.is_git());
        assert_eq!(repo.url(), None);
        repo.update().unwrap();
    }

    #[test]
    fn test_known_url_is_not_looked_up() {
        let repo = WordlistRepo::new(
            "/nonexistent/SecLists",
            Some("https://github.com/danielmiessler/SecLists.git".to_string()),
        );
        assert_eq!(repo.name(), "SecLists");
        assert_eq!(
            repo.url(),
            Some("https://github.com/danielmiessler/SecLists.git")
        );
    }

    #[test]
    fn test_delete_removes_directory_tree() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("lists");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/words.txt"), "a\n").unwrap();

        WordlistRepo::new(&dir, None).delete().unwrap();

        assert!(!dir.exists());
    }

    fn name_of(url: &str) -> Option<String> {
        repository_name(&Url::parse(url).unwrap()).map(str::to_string)
    }

    #[test]
    fn test_repository_name_strips_one_git_suffix() {
        assert_eq!(
            name_of("https://github.com/danielmiessler/SecLists.git").as_deref(),
            Some("SecLists")
        );
        assert_eq!(
            name_of("https://example.com/lists.git.git").as_deref(),
            Some("lists.git")
        );
        assert_eq!(
            name_of("https://example.com/wordlists/").as_deref(),
            Some("wordlists")
        );
        assert_eq!(name_of("git://example.com/.git"), None);
    }

    #[test]
    fn test_try_url_of_plain_directory_is_none() {
        let temp = tempfile::TempDir::new().unwrap();
        let repo = WordlistRepo::new(temp.path(), None);
        assert_eq!(repo.try_url().unwrap(), None);
    }

    #[test]
    fn test_download_rejects_url_without_repository_name() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = WordlistRepo::download("git://example.com/.git", temp.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::WordlistsError::InvalidUrl { .. }
        ));
    }
}
