//! Downloaded wordlists
//!
//! A wordlist is either a single file ([`WordlistFile`]) or a git working
//! copy of wordlists ([`WordlistRepo`]). The closed [`Artifact`] enum
//! dispatches on the [`ArtifactKind`] recorded in the cache manifest.

mod file;
mod repo;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::download::invalid_url;
use crate::error::manifest::unsupported_type;
use crate::error::{Result, WordlistsError};

pub use file::WordlistFile;
pub use repo::WordlistRepo;

/// The kind of a downloaded wordlist, as stored in the manifest `type:` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A single wordlist file
    File,
    /// A git repository of wordlists
    Git,
}

impl ArtifactKind {
    /// The manifest spelling of this kind
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::File => "file",
            ArtifactKind::Git => "git",
        }
    }

    /// Pick the kind for a download URL
    ///
    /// `git://` URLs and URLs whose path ends in `.git` are repositories,
    /// everything else is a file.
    pub fn for_url(url: &Url) -> Self {
        if url.scheme() == "git" || url.path().ends_with(".git") {
            ArtifactKind::Git
        } else {
            ArtifactKind::File
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = WordlistsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(ArtifactKind::File),
            "git" => Ok(ArtifactKind::Git),
            other => Err(unsupported_type(other)),
        }
    }
}

/// Parse a download URL
pub(crate) fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| invalid_url(url, e.to_string()))
}

/// Last non-empty path segment of a URL
pub(crate) fn url_basename(url: &Url) -> Option<&str> {
    url.path_segments()?.rev().find(|s| !s.is_empty())
}

/// A downloaded wordlist file or repository
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    File(WordlistFile),
    Repo(WordlistRepo),
}

impl Artifact {
    /// Build the artifact of the given kind rooted at `path`
    pub fn new(kind: ArtifactKind, path: impl Into<std::path::PathBuf>, url: Option<String>) -> Self {
        match kind {
            ArtifactKind::File => Artifact::File(WordlistFile::new(path, url)),
            ArtifactKind::Git => Artifact::Repo(WordlistRepo::new(path, url)),
        }
    }

    /// Download `url` into `dest_dir`, cloning repositories and fetching files
    pub fn download(url: &str, dest_dir: &Path) -> Result<Self> {
        let parsed = parse_url(url)?;

        match ArtifactKind::for_url(&parsed) {
            ArtifactKind::Git => WordlistRepo::download(url, dest_dir).map(Artifact::Repo),
            ArtifactKind::File => WordlistFile::download(url, dest_dir).map(Artifact::File),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::File(_) => ArtifactKind::File,
            Artifact::Repo(_) => ArtifactKind::Git,
        }
    }

    /// Logical name of the wordlist
    pub fn name(&self) -> &str {
        match self {
            Artifact::File(file) => file.name(),
            Artifact::Repo(repo) => repo.name(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Artifact::File(file) => file.path(),
            Artifact::Repo(repo) => repo.path(),
        }
    }

    /// The path component inside the wordlist directory
    pub fn filename(&self) -> String {
        match self {
            Artifact::File(file) => file.filename(),
            Artifact::Repo(repo) => repo.filename(),
        }
    }

    /// Source URL, if known
    pub fn url(&self) -> Option<&str> {
        match self {
            Artifact::File(file) => file.url(),
            Artifact::Repo(repo) => repo.url(),
        }
    }

    /// Source URL, failing when a repository's remote cannot be read
    pub fn try_url(&self) -> Result<Option<&str>> {
        match self {
            Artifact::File(file) => Ok(file.url()),
            Artifact::Repo(repo) => repo.try_url(),
        }
    }

    /// Re-fetch the wordlist in place
    pub fn update(&self) -> Result<()> {
        match self {
            Artifact::File(file) => file.update(),
            Artifact::Repo(repo) => repo.update(),
        }
    }

    /// Delete the wordlist from disk
    pub fn delete(&self) -> Result<()> {
        match self {
            Artifact::File(file) => file.delete(),
            Artifact::Repo(repo) => repo.delete(),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

impl From<WordlistFile> for Artifact {
    fn from(file: WordlistFile) -> Self {
        Artifact::File(file)
    }
}

impl From<WordlistRepo> for Artifact {
    fn from(repo: WordlistRepo) -> Self {
        Artifact::Repo(repo)
    }
}
