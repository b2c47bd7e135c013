//! External `git` process boundary
//!
//! Repository wordlists are cloned, pulled and inspected by running the
//! system `git` executable. Authentication is whatever the user's git is
//! configured with (SSH keys, credential helpers, `GIT_SSH_COMMAND`, ...).
//!
//! A missing executable maps to [`DownloadFailure::GitNotInstalled`], a
//! non-zero exit status to [`DownloadFailure::GitCommandFailed`].
//!
//! [`DownloadFailure::GitNotInstalled`]: crate::error::DownloadFailure::GitNotInstalled
//! [`DownloadFailure::GitCommandFailed`]: crate::error::DownloadFailure::GitCommandFailed

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::download::{git_command_failed, git_not_installed};
use crate::error::{Result, WordlistsError};

/// Name of the git executable
const GIT: &str = "git";

fn spawn_error(err: &std::io::Error, args: &[String]) -> WordlistsError {
    if err.kind() == ErrorKind::NotFound {
        git_not_installed()
    } else {
        git_command_failed(args)
    }
}

/// Run `git` with the given arguments, inheriting stdout/stderr
fn run(args: &[String]) -> Result<()> {
    debug!(command = %args.join(" "), "running git");

    let status = Command::new(GIT)
        .args(args)
        .stdin(Stdio::null())
        .status()
        .map_err(|e| spawn_error(&e, args))?;

    if !status.success() {
        return Err(git_command_failed(args));
    }

    Ok(())
}

/// Shallow-clone (depth 1) `url` into `dest`
pub fn clone_shallow(url: &str, dest: &Path) -> Result<()> {
    run(&[
        "clone".to_string(),
        "--depth".to_string(),
        "1".to_string(),
        "--".to_string(),
        url.to_string(),
        dest.display().to_string(),
    ])
}

/// Pull the configured remote into the working copy at `repo`
pub fn pull(repo: &Path) -> Result<()> {
    run(&[
        "-C".to_string(),
        repo.display().to_string(),
        "pull".to_string(),
    ])
}

/// Read `remote.origin.url` from the working copy at `repo`
///
/// Returns `None` when the key is not set. This only reads local
/// configuration and never touches the network.
pub fn remote_url(repo: &Path) -> Result<Option<String>> {
    let args = [
        "-C".to_string(),
        repo.display().to_string(),
        "config".to_string(),
        "--get".to_string(),
        "remote.origin.url".to_string(),
    ];

    let output = Command::new(GIT)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(&e, &args))?;

    // `git config --get` exits with 1 when the key is missing
    if !output.status.success() {
        return Ok(None);
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!url.is_empty()).then_some(url))
}
