//! Catalog loading and search

mod common;

use std::collections::BTreeSet;

use common::TestCache;
use pretty_assertions::assert_eq;
use wordlists::{CatalogIndex, WordlistsError};

#[test]
fn test_bundled_catalog_search() {
    let index = CatalogIndex::bundled().unwrap();

    let tlds: Vec<&str> = index
        .search(Some("TLD"), ["dns"])
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(tlds, vec!["tlds"]);

    let subdomains: BTreeSet<&str> = index
        .search(Some("dns"), ["subdomains"])
        .map(|e| e.name.as_str())
        .collect();
    assert!(subdomains.contains("subdomains-1000"));
    assert!(!subdomains.contains("tlds"));
    assert!(!subdomains.contains("rockyou"));

    for entry in index.search(None, ["passwords"]) {
        assert!(entry.categories.contains("passwords"));
    }
}

#[test]
fn test_load_from_file() {
    let test = TestCache::new();
    let path = test.write_file(
        "catalog.yml",
        "words:\n  url: https://example.com/words.txt\n  summary: Some words.\n  categories: [misc]\n",
    );

    let index = CatalogIndex::load(&path).unwrap();
    let entry = index.get("words").unwrap();
    assert_eq!(entry.url, "https://example.com/words.txt");
    assert_eq!(entry.summary, "Some words.");
    assert!(index.get("other").is_none());
}

#[test]
fn test_load_rejects_bad_schema() {
    let test = TestCache::new();
    let path = test.write_file("catalog.yml", "just a string\n");

    let err = CatalogIndex::load(&path).unwrap_err();
    assert!(matches!(err, WordlistsError::InvalidSchema { .. }));
}
