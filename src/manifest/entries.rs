//! Mutable view of the manifest inside a transaction

use serde_yaml::{Mapping, Value};

use super::WordlistMetadata;
use crate::error::Result;

/// The manifest entries being changed by [`Manifest::transaction`](super::Manifest::transaction)
#[derive(Debug, Default)]
pub struct ManifestEntries {
    entries: Mapping,
}

impl ManifestEntries {
    pub(super) fn new(entries: Mapping) -> Self {
        Self { entries }
    }

    pub(super) fn into_inner(self) -> Mapping {
        self.entries
    }

    /// Record `metadata` under `name`, replacing any previous entry
    pub fn insert(&mut self, name: &str, metadata: &WordlistMetadata) -> Result<()> {
        let value = serde_yaml::to_value(metadata)?;
        self.entries.insert(Value::String(name.to_string()), value);
        Ok(())
    }

    /// Drop the entry for `name`, returning whether it existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
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
}
