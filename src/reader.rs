//! Line-by-line reading of plain and compressed wordlists
//!
//! `.gz` files are decompressed in-process. `.bz2` and `.xz` files are
//! streamed through `bzip2 -dc` / `xz -dc`, the same way repositories go
//! through the `git` executable.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::error::Result;
use crate::error::fs::io_failed;

/// Decompressor executable for an extension, if it needs one
fn decompressor_for(extension: &str) -> Option<&'static str> {
    match extension {
        "bz2" => Some("bzip2"),
        "xz" => Some("xz"),
        _ => None,
    }
}

/// A running `bzip2 -dc` / `xz -dc` process
struct Decompressor {
    program: &'static str,
    child: Child,
}

/// Iterator over the lines of a wordlist
///
/// Yields each line with its trailing `\n` or `\r\n` removed. For `.bz2`
/// and `.xz` files a decompressor that exits unsuccessfully is reported as
/// a final `Err` item.
pub struct WordlistReader {
    path: PathBuf,
    lines: Lines<BufReader<Box<dyn Read>>>,
    decompressor: Option<Decompressor>,
}

impl WordlistReader {
    /// Open `path`, picking a decoder from its extension
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let (source, decompressor): (Box<dyn Read>, Option<Decompressor>) =
            match decompressor_for(extension) {
            Some(program) => {
                debug!(program, path = %path.display(), "spawning decompressor");
                let mut child = Command::new(program)
                    .arg("-dc")
                    .arg(path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .spawn()
                    .map_err(|e| io_failed(format!("run {program} on"), path, e))?;

                let stdout = child.stdout.take().ok_or_else(|| {
                    io_failed(
                        format!("read {program} output for"),
                        path,
                        io::Error::other("stdout was not captured"),
                    )
                })?;
                (
                    Box::new(stdout) as Box<dyn Read>,
                    Some(Decompressor { program, child }),
                )
            }
            None => {
                let file = File::open(path).map_err(|e| io_failed("open", path, e))?;
                if extension == "gz" {
                    (Box::new(MultiGzDecoder::new(file)) as Box<dyn Read>, None)
                } else {
                    (Box::new(file) as Box<dyn Read>, None)
                }
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(source).lines(),
            decompressor,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reap the decompressor once its output is exhausted
    fn finish(&mut self) -> Option<io::Result<String>> {
        let Decompressor { program, mut child } = self.decompressor.take()?;

        match child.wait() {
            Ok(status) if status.success() => None,
            Ok(status) => Some(Err(io::Error::other(format!(
                "{program} -dc {} exited with {status}",
                self.path.display()
            )))),
            Err(e) => Some(Err(e)),
        }
    }
}

impl Iterator for WordlistReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(line) = self.lines.next() else {
            return self.finish();
        };

        Some(line.map(|mut line| {
            if line.ends_with('\r') {
                line.pop();
            }
            line
        }))
    }
}

impl Drop for WordlistReader {
    fn drop(&mut self) {
        if let Some(Decompressor { mut child, .. }) = self.decompressor.take() {
            // The reader may be dropped before the decompressor finishes
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl fmt::Debug for WordlistReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordlistReader")
            .field("path", &self.path)
            .field(
                "decompressor",
                &self.decompressor.as_ref().map(|d| (d.program, d.child.id())),
            )
            .finish_non_exhaustive()
    }
}
