//! Single-file wordlists fetched over HTTP(S)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{parse_url, url_basename};
use crate::error::Result;
use crate::error::download::invalid_url;
use crate::error::fs::io_failed;
use crate::http;

/// A wordlist stored as one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistFile {
    path: PathBuf,
    name: String,
    url: Option<String>,
}

impl WordlistFile {
    pub fn new(path: impl Into<PathBuf>, url: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { path, name, url }
    }

    /// Download `url` into `dest_dir`, named after the URL's last path segment
    pub fn download(url: &str, dest_dir: &Path) -> Result<Self> {
        let parsed = parse_url(url)?;
        let filename =
            url_basename(&parsed).ok_or_else(|| invalid_url(url, "URL has no file name"))?;
        let path = dest_dir.join(filename);

        http::download_to(url, &path)?;

        Ok(Self::new(path, Some(url.to_string())))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// File name including the extension
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Re-download the file from its URL; does nothing without a URL
    pub fn update(&self) -> Result<()> {
        match &self.url {
            Some(url) => http::download_to(url, &self.path),
            None => Ok(()),
        }
    }

    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|e| io_failed("delete", &self.path, e))?;
        info!(path = %self.path.display(), "deleted wordlist file");
        Ok(())
    }
}
