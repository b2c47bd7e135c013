//! File system errors

use std::path::Path;

use super::WordlistsError;

/// Creates an IO error for an operation on a path
pub fn io_failed(
    operation: impl Into<String>,
    path: impl AsRef<Path>,
    source: std::io::Error,
) -> WordlistsError {
    WordlistsError::Io {
        operation: operation.into(),
        path: path.as_ref().display().to_string(),
        source,
    }
}
