//! Default locations and fixed names
//!
//! The cache root defaults to the platform's standard cache location
//! (e.g. XDG on Linux, Library/Caches on macOS) with a `ronin-wordlists`
//! subdirectory, and can be overridden with `WORDLISTS_CACHE_DIR`.
//! System-wide wordlist directories can be replaced with `WORDLISTS_PATH`.

use std::path::PathBuf;

use crate::error::{Result, WordlistsError};

/// Default cache directory name under user's cache directory
const CACHE_DIR: &str = "ronin-wordlists";

/// Environment variable overriding the cache root
pub const CACHE_DIR_ENV: &str = "WORDLISTS_CACHE_DIR";

/// Environment variable replacing the system wordlist directories
pub const SEARCH_PATH_ENV: &str = "WORDLISTS_PATH";

/// File name of the manifest at the cache root
pub const MANIFEST_FILE: &str = "manifest.yml";

/// Subdirectory of the cache root holding downloaded wordlists
pub const WORDLISTS_DIR: &str = "wordlists";

/// File extensions recognized as wordlists
pub const WORDLIST_EXTENSIONS: &[&str] = &["txt", "gz", "bz2", "xz"];

/// System-wide wordlist directories, highest priority first
const SYSTEM_WORDLIST_DIRS: &[&str] = &["/usr/local/share/wordlists", "/usr/share/wordlists"];

/// User agent sent with HTTP downloads
pub const USER_AGENT: &str = concat!("wordlists/", env!("CARGO_PKG_VERSION"));

/// Get the default cache directory path
pub fn cache_dir() -> Result<PathBuf> {
    if let Some(cache_dir) = std::env::var_os(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir().ok_or(WordlistsError::CacheDirUnavailable)?;

    Ok(base.join(CACHE_DIR))
}

/// System-wide wordlist directories, highest priority first
pub fn system_wordlist_dirs() -> Vec<PathBuf> {
    match std::env::var_os(SEARCH_PATH_ENV) {
        Some(paths) => std::env::split_paths(&paths)
            .filter(|p| !p.as_os_str().is_empty())
            .collect(),
        None => SYSTEM_WORDLIST_DIRS.iter().map(PathBuf::from).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(key: &str, value: Option<&str>, f: F) {
        let original = std::env::var_os(key);
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        f();

        unsafe {
            match original {
                Some(o) => std::env::set_var(key, o),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_cache_dir_env_override() {
        with_env(CACHE_DIR_ENV, Some("/tmp/wordlists-cache"), || {
            assert_eq!(cache_dir().unwrap(), PathBuf::from("/tmp/wordlists-cache"));
        });
    }

    #[test]
    #[serial]
    fn test_cache_dir_default_ends_with_name() {
        with_env(CACHE_DIR_ENV, None, || {
            if let Ok(path) = cache_dir() {
                assert!(path.ends_with(CACHE_DIR));
            }
        });
    }

    #[test]
    #[serial]
    fn test_system_wordlist_dirs_default_order() {
        with_env(SEARCH_PATH_ENV, None, || {
            assert_eq!(
                system_wordlist_dirs(),
                vec![
                    PathBuf::from("/usr/local/share/wordlists"),
                    PathBuf::from("/usr/share/wordlists"),
                ]
            );
        });
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_system_wordlist_dirs_env_override() {
        with_env(SEARCH_PATH_ENV, Some("/opt/lists:/srv/lists"), || {
            assert_eq!(
                system_wordlist_dirs(),
                vec![PathBuf::from("/opt/lists"), PathBuf::from("/srv/lists")]
            );
        });
    }
}
