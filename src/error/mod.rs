//! Error types and handling for wordlists
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`wordlist`]: Wordlist lookup errors
//! - [`manifest`]: Manifest and catalog schema errors
//! - [`download`]: HTTP and git download failures
//! - [`fs`]: File system errors

pub mod download;
pub mod fs;
pub mod manifest;
pub mod wordlist;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for wordlist operations
#[derive(Error, Diagnostic, Debug)]
pub enum WordlistsError {
    #[error("{message}")]
    #[diagnostic(
        code(wordlists::wordlist::not_found),
        help("Check the wordlist name, or download the wordlist first")
    )]
    WordlistNotFound { message: String },

    #[error("Invalid wordlist pattern {pattern:?}: {reason}")]
    #[diagnostic(
        code(wordlists::wordlist::invalid_pattern),
        help("Patterns support the * and ? wildcards and match file names only")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("{message}")]
    #[diagnostic(
        code(wordlists::manifest::invalid),
        help("Fix or remove the manifest.yml file inside the cache directory")
    )]
    InvalidManifestFile { message: String },

    #[error("{message}")]
    #[diagnostic(code(wordlists::catalog::invalid_schema))]
    InvalidSchema { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    DownloadFailed(#[from] DownloadFailure),

    #[error("Invalid URL {url:?}: {reason}")]
    #[diagnostic(
        code(wordlists::url::invalid),
        help("Wordlist URLs look like https://host/path/list.txt or https://host/repo.git")
    )]
    InvalidUrl { url: String, reason: String },

    #[error("Could not determine cache directory")]
    #[diagnostic(
        code(wordlists::config::cache_dir_unavailable),
        help("Set WORDLISTS_CACHE_DIR to choose a cache directory explicitly")
    )]
    CacheDirUnavailable,

    #[error("Failed to {operation} {path}: {source}")]
    #[diagnostic(code(wordlists::fs::io_error))]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The ways fetching a wordlist can fail.
#[derive(Error, Diagnostic, Debug)]
pub enum DownloadFailure {
    #[error("Failed to download {url}: {source}")]
    #[diagnostic(
        code(wordlists::download::transport),
        help("Check the URL and your network connection")
    )]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("git command failed: {command}")]
    #[diagnostic(code(wordlists::download::git_command_failed))]
    GitCommandFailed { command: String },

    #[error("git is not installed on the system")]
    #[diagnostic(
        code(wordlists::download::git_not_installed),
        help("Install git and make sure it is on your PATH")
    )]
    GitNotInstalled,
}

impl From<serde_yaml::Error> for WordlistsError {
    fn from(err: serde_yaml::Error) -> Self {
        WordlistsError::InvalidManifestFile {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WordlistsError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = WordlistsError::WordlistNotFound {
            message: "wordlist not found: \"foo\"".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("wordlists::wordlist::not_found".to_string())
        );
    }

    #[test]
    fn test_download_failure_code_is_transparent() {
        let err: WordlistsError = DownloadFailure::GitNotInstalled.into();
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("wordlists::download::git_not_installed".to_string())
        );
    }

    test_error_contains!(
        test_git_not_installed_message,
        WordlistsError::from(DownloadFailure::GitNotInstalled),
        "git is not installed on the system"
    );

    test_error_contains!(
        test_cache_dir_unavailable_message,
        WordlistsError::CacheDirUnavailable,
        "Could not determine cache directory"
    );

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: WordlistsError = parse_result.unwrap_err().into();
        assert!(matches!(err, WordlistsError::InvalidManifestFile { .. }));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = fs::io_failed(
            "delete",
            "/tmp/missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "Failed to delete /tmp/missing.txt: gone");
        assert!(err.source().is_some());
    }
}
