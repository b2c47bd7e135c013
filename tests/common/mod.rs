//! Common test utilities for wordlists integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Route test logs through the test harness; honours `RUST_LOG`
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A scratch directory holding a cache root and any fixture repositories
pub struct TestCache {
    pub temp: TempDir,
    pub root: PathBuf,
}

impl TestCache {
    pub fn new() -> Self {
        init_logging();
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("cache");
        Self { temp, root }
    }

    /// Path of a downloaded wordlist inside the cache
    pub fn wordlist_path(&self, filename: &str) -> PathBuf {
        self.root.join("wordlists").join(filename)
    }

    /// Write a file relative to the scratch directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Whether the `git` executable is on `PATH`
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Initialize a git repository at `path` with one commit containing `files`
pub fn init_wordlist_repo(path: &Path, files: &[(&str, &str)]) -> git2::Repository {
    std::fs::create_dir_all(path).expect("Failed to create repository directory");
    let repo = git2::Repository::init(path).expect("Failed to init repository");
    commit_files(&repo, files, "Initial wordlists");
    repo
}

/// Write `files` into the working tree of `repo` and commit them
pub fn commit_files(repo: &git2::Repository, files: &[(&str, &str)], message: &str) {
    let workdir = repo.workdir().expect("Repository has no working tree");
    let mut index = repo.index().expect("Failed to open index");

    for (relative, content) in files {
        let path = workdir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        index
            .add_path(Path::new(relative))
            .expect("Failed to stage file");
    }
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature =
        git2::Signature::now("Wordlists Test", "test@example.com").expect("Failed to sign");

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("Failed to commit");
}

/// `file://` URL for a local path
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Serve `body` at `route` from a mock HTTP server
///
/// The runtime must outlive every request made to the server.
pub fn serve(route: &str, body: &str) -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    });
    (runtime, server)
}

/// Serve an error status at `route`
pub fn serve_status(route: &str, status: u16) -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        server
    });
    (runtime, server)
}
