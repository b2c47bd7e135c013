//! The cache manifest
//!
//! `manifest.yml` maps each downloaded wordlist's name to how it was
//! fetched:
//!
//! ```yaml
//! rockyou:
//!   type: file
//!   url: https://example.com/rockyou.txt.gz
//!   filename: rockyou.txt.gz
//! SecLists:
//!   type: git
//!   url: https://github.com/danielmiessler/SecLists.git
//!   filename: SecLists
//! ```
//!
//! Values are validated when an entry is looked up rather than when the
//! document is loaded, so one bad entry does not hide the others.
//! Mutations go through [`Manifest::transaction`], which rewrites the whole
//! document atomically.

mod entries;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::artifact::ArtifactKind;
use crate::error::Result;
use crate::error::fs::io_failed;
use crate::error::manifest::{invalid_attribute, malformed_entry, missing_attribute, parse_failed};

pub use entries::ManifestEntries;

/// Metadata recorded for one downloaded wordlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistMetadata {
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub url: Option<String>,
    /// Path of the wordlist inside the cache's wordlist directory
    pub filename: String,
}

/// The manifest file and its parsed entries
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    entries: Mapping,
}

fn read_entries(path: &Path) -> Result<Mapping> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Mapping::new()),
        Err(e) => return Err(io_failed("read", path, e)),
    };

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content).map_err(|e| parse_failed(path, e))? {
        Value::Mapping(entries) => Ok(entries),
        Value::Null => Ok(Mapping::new()),
        _ => Err(parse_failed(path, "expected a mapping of wordlist names")),
    }
}

fn write_entries(path: &Path, entries: &Mapping) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| io_failed("create directory", dir, e))?;

    let content = serde_yaml::to_string(entries)?;

    // Write and sync a temporary file next to the manifest, then rename over it
    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| io_failed("create temporary file in", dir, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| io_failed("write", tmp.path(), e))?;

    tmp.persist(path)
        .map_err(|e| io_failed("write", path, e.error))?;
    Ok(())
}

fn string_attribute(
    name: &str,
    attributes: &Mapping,
    attribute: &str,
) -> Result<Option<Option<String>>> {
    match attributes.get(attribute) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) => Ok(Some(Some(s.clone()))),
        Some(_) => Err(invalid_attribute(name, attribute)),
    }
}

impl Manifest {
    /// Load the manifest at `path`; a missing or empty file is an empty manifest
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = read_entries(&path)?;
        debug!(path = %path.display(), entries = entries.len(), "loaded manifest");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wordlist names in the order they were added
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up and validate the entry for `name`
    ///
    /// Returns `Ok(None)` when there is no entry. An entry lacking `type`,
    /// `url` or `filename`, or with an unknown `type`, is an
    /// `InvalidManifestFile` error. `url` may be null.
    pub fn get(&self, name: &str) -> Result<Option<WordlistMetadata>> {
        let Some(value) = self.entries.get(name) else {
            return Ok(None);
        };
        let attributes = value.as_mapping().ok_or_else(|| malformed_entry(name))?;

        let kind = string_attribute(name, attributes, "type")?
            .ok_or_else(|| missing_attribute(name, "type"))?
            .ok_or_else(|| invalid_attribute(name, "type"))?;

        let url = string_attribute(name, attributes, "url")?
            .ok_or_else(|| missing_attribute(name, "url"))?;

        let filename = string_attribute(name, attributes, "filename")?
            .ok_or_else(|| missing_attribute(name, "filename"))?
            .ok_or_else(|| invalid_attribute(name, "filename"))?;

        Ok(Some(WordlistMetadata {
            kind: kind.parse()?,
            url,
            filename,
        }))
    }

    /// Apply `f` to the manifest and commit the result atomically
    ///
    /// The entries are re-read from disk before `f` runs. If `f` or the
    /// write fails, neither the file nor this in-memory copy changes.
    pub fn transaction<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ManifestEntries) -> Result<T>,
    {
        let mut entries = ManifestEntries::new(read_entries(&self.path)?);
        let output = f(&mut entries)?;

        let entries = entries.into_inner();
        write_entries(&self.path, &entries)?;
        debug!(path = %self.path.display(), entries = entries.len(), "committed manifest");

        self.entries = entries;
        Ok(output)
    }

    /// Forget every entry in memory without touching the file
    pub(crate) fn clear(&mut self) {
        self.entries = Mapping::new();
    }
}
