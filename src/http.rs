//! Blocking HTTP(S) downloads
//!
//! Bodies are streamed into a temporary file next to the destination and
//! renamed into place once the transfer completes, so a failed download
//! never leaves a truncated wordlist behind.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::USER_AGENT;
use crate::error::Result;
use crate::error::download::transport;
use crate::error::fs::io_failed;

fn client(url: &str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| transport(url, e))
}

/// Download `url` and write its body to `dest`, replacing any existing file
pub fn download_to(url: &str, dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| io_failed("create directory", dir, e))?;

    debug!(url, dest = %dest.display(), "downloading wordlist file");

    let mut response = client(url)?
        .get(url)
        .send()
        .and_then(Response::error_for_status)
        .map_err(|e| transport(url, e))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| io_failed("create temporary file in", dir, e))?;

    let bytes = response
        .copy_to(tmp.as_file_mut())
        .map_err(|e| transport(url, e))?;

    tmp.as_file()
        .sync_all()
        .map_err(|e| io_failed("write", tmp.path(), e))?;

    tmp.persist(dest)
        .map_err(|e| io_failed("write", dest, e.error))?;

    info!(url, dest = %dest.display(), bytes, "downloaded wordlist file");
    Ok(())
}
