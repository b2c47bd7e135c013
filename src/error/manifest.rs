//! Manifest and catalog schema errors

use std::path::Path;

use super::WordlistsError;

/// Creates the error for a manifest entry lacking a required attribute
pub fn missing_attribute(name: &str, attribute: &str) -> WordlistsError {
    WordlistsError::InvalidManifestFile {
        message: format!("entry {name} is missing a {attribute} attribute"),
    }
}

/// Creates the error for a manifest entry whose attribute has the wrong shape
pub fn invalid_attribute(name: &str, attribute: &str) -> WordlistsError {
    WordlistsError::InvalidManifestFile {
        message: format!("entry {name} has an invalid {attribute} attribute"),
    }
}

/// Creates the error for a manifest entry that is not a mapping of attributes
pub fn malformed_entry(name: &str) -> WordlistsError {
    WordlistsError::InvalidManifestFile {
        message: format!("entry {name} is not a mapping of attributes"),
    }
}

/// Creates the error for a manifest entry with an unknown wordlist type
pub fn unsupported_type(kind: &str) -> WordlistsError {
    WordlistsError::InvalidManifestFile {
        message: format!("unsupported wordlist type: {kind:?}"),
    }
}

/// Creates a manifest parse error
pub fn parse_failed(path: &Path, reason: impl std::fmt::Display) -> WordlistsError {
    WordlistsError::InvalidManifestFile {
        message: format!("failed to parse manifest {}: {reason}", path.display()),
    }
}

/// Creates a catalog schema error
pub fn invalid_schema(message: impl Into<String>) -> WordlistsError {
    WordlistsError::InvalidSchema {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_names_entry_and_field() {
        let err = missing_attribute("foo", "type");
        assert!(matches!(err, WordlistsError::InvalidManifestFile { .. }));
        assert_eq!(err.to_string(), "entry foo is missing a type attribute");
    }

    #[test]
    fn test_unsupported_type() {
        let err = unsupported_type("svn");
        assert_eq!(err.to_string(), "unsupported wordlist type: \"svn\"");
    }

    #[test]
    fn test_parse_failed_names_the_file() {
        let err = parse_failed(Path::new("/cache/manifest.yml"), "bad indentation");
        assert_eq!(
            err.to_string(),
            "failed to parse manifest /cache/manifest.yml: bad indentation"
        );
    }
}
