//! Reading a repository's remote when `git` cannot be run
//!
//! These tests change `PATH`, so they live in their own test binary and run
//! serially.

mod common;

use std::ffi::OsString;

use serial_test::serial;
use wordlists::{Artifact, ArtifactKind, DownloadFailure, WordlistRepo, WordlistsError};

/// Run `f` with `PATH` pointing at an empty directory
fn without_git<T>(f: impl FnOnce() -> T) -> T {
    let empty = tempfile::TempDir::new().unwrap();
    let original: Option<OsString> = std::env::var_os("PATH");

    unsafe { std::env::set_var("PATH", empty.path()) };
    let result = f();
    unsafe {
        match original {
            Some(path) => std::env::set_var("PATH", path),
            None => std::env::remove_var("PATH"),
        }
    }

    result
}

#[test]
#[serial]
fn test_missing_git_is_an_error_not_a_missing_remote() {
    if !common::git_available() {
        return;
    }

    let test = common::TestCache::new();
    let path = test.temp.path().join("lists");
    let repo = git2::Repository::init(&path).unwrap();
    repo.remote("origin", "https://github.com/example/lists.git")
        .unwrap();

    let untracked = WordlistRepo::new(&path, None);

    let err = without_git(|| untracked.try_url()).unwrap_err();
    assert!(matches!(
        err,
        WordlistsError::DownloadFailed(DownloadFailure::GitNotInstalled)
    ));

    // The failure is not remembered
    assert_eq!(
        untracked.try_url().unwrap(),
        Some("https://github.com/example/lists.git")
    );
}

#[test]
#[serial]
fn test_lossy_url_retries_after_failure() {
    if !common::git_available() {
        return;
    }

    let test = common::TestCache::new();
    let path = test.temp.path().join("lists");
    let repo = git2::Repository::init(&path).unwrap();
    repo.remote("origin", "https://github.com/example/lists.git")
        .unwrap();

    let artifact = Artifact::new(ArtifactKind::Git, &path, None);

    assert_eq!(without_git(|| artifact.url().map(str::to_string)), None);
    assert!(without_git(|| artifact.try_url().is_err()));
    assert_eq!(
        artifact.try_url().unwrap(),
        Some("https://github.com/example/lists.git")
    );
}
