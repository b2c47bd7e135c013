//! Catalog of wordlists available for download
//!
//! The catalog is a YAML mapping of wordlist name to its download URL, a
//! one-line summary and a list of category tags:
//!
//! ```yaml
//! tlds:
//!   url: https://raw.githubusercontent.com/rbsec/dnscan/master/tlds.txt
//!   categories: [dns, tlds]
//!   summary: Every top-level domain suffix from the dnscan util.
//! ```
//!
//! A copy ships inside the crate and is available as [`CatalogIndex::bundled`].

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::Result;
use crate::error::fs::io_failed;
use crate::error::manifest::invalid_schema;

/// The catalog shipped with the crate
const BUNDLED_CATALOG: &str = include_str!("../../data/wordlists.yml");

/// A wordlist listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
    pub summary: String,
    pub categories: BTreeSet<String>,
}

#[derive(Deserialize)]
struct RawEntry {
    url: Option<String>,
    summary: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
}

impl CatalogEntry {
    fn matches_keyword(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
            || self.summary.to_lowercase().contains(keyword)
            || self
                .categories
                .iter()
                .any(|c| c.to_lowercase().contains(keyword))
    }

    fn has_categories(&self, categories: &[String]) -> bool {
        categories
            .iter()
            .all(|wanted| self.categories.iter().any(|c| c.to_lowercase() == *wanted))
    }
}

/// The parsed catalog, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| io_failed("read", path, e))?;
        Self::from_yaml(&content)
    }

    /// The catalog shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    /// Parse a catalog document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(content)
            .map_err(|e| invalid_schema(format!("wordlist catalog is not valid YAML: {e}")))?;

        let Value::Mapping(mapping) = document else {
            return Err(invalid_schema("wordlist catalog does not contain a mapping"));
        };

        let entries = mapping
            .into_iter()
            .map(|(key, value)| -> Result<CatalogEntry> {
                let name = match key {
                    Value::String(name) => name,
                    other => serde_yaml::to_string(&other)
                        .map(|s| s.trim_end().to_string())
                        .unwrap_or_default(),
                };
                let raw: RawEntry = serde_yaml::from_value(value).map_err(|e| {
                    invalid_schema(format!("wordlist catalog entry {name:?} is malformed: {e}"))
                })?;

                let url = raw.url.ok_or_else(|| {
                    invalid_schema(format!("wordlist catalog entry does not have a URL: {name:?}"))
                })?;
                let summary = raw.summary.ok_or_else(|| {
                    invalid_schema(format!(
                        "wordlist catalog entry does not have a summary: {name:?}"
                    ))
                })?;

                Ok(CatalogEntry {
                    name,
                    url,
                    summary,
                    categories: raw.categories.into_iter().collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries having every category in `categories` and, when given,
    /// containing `keyword` in their name, summary or categories
    ///
    /// Matching is case-insensitive. The returned iterator filters lazily.
    pub fn search<I, S>(
        &self,
        keyword: Option<&str>,
        categories: I,
    ) -> impl Iterator<Item = &CatalogEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keyword = keyword.map(str::to_lowercase);
        let categories: Vec<String> = categories
            .into_iter()
            .map(|c| c.as_ref().to_lowercase())
            .collect();

        self.entries.iter().filter(move |entry| {
            entry.has_categories(&categories)
                && keyword.as_deref().is_none_or(|k| entry.matches_keyword(k))
        })
    }
}

impl<'a> IntoIterator for &'a CatalogIndex {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
