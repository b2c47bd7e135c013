//! Download errors

use super::{DownloadFailure, WordlistsError};

/// Creates a transport failure for an HTTP(S) download
pub fn transport(
    url: impl Into<String>,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> WordlistsError {
    DownloadFailure::Transport {
        url: url.into(),
        source: source.into(),
    }
    .into()
}

/// Creates a failed git command error, rendering the command line as it was run
pub fn git_command_failed<S: AsRef<str>>(args: &[S]) -> WordlistsError {
    let command = std::iter::once("git")
        .chain(args.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join(" ");

    DownloadFailure::GitCommandFailed { command }.into()
}

/// Creates the error for a missing `git` executable
pub fn git_not_installed() -> WordlistsError {
    DownloadFailure::GitNotInstalled.into()
}

/// Creates an invalid URL error
pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> WordlistsError {
    WordlistsError::InvalidUrl {
        url: url.into(),
        reason: reason.into(),
    }
}
