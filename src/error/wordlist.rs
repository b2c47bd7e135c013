//! Wordlist lookup errors

use super::WordlistsError;

/// Creates the error for a name missing from the cache manifest
pub fn not_downloaded(name: &str) -> WordlistsError {
    WordlistsError::WordlistNotFound {
        message: format!("wordlist not downloaded: {name:?}"),
    }
}

/// Creates the error for a name no wordlist directory contains
pub fn not_found(name: &str) -> WordlistsError {
    WordlistsError::WordlistNotFound {
        message: format!("wordlist not found: {name:?}"),
    }
}

/// Creates the error for deleting a name a wordlist directory does not contain
pub fn unknown(name: &str) -> WordlistsError {
    WordlistsError::WordlistNotFound {
        message: format!("unknown wordlist: {name:?}"),
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> WordlistsError {
    WordlistsError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}
