// src/config.rs
// =============================================================================
// Run configuration for the fetch pipeline.
//
// The deployment constants (catalog endpoint, cache folder) live here as
// defaults; the actual values travel in a plain struct that gets passed
// into the pipeline functions. No global state, no hidden setup.
//
// Rust concepts:
// - Constants: compile-time values shared across modules
// - PathBuf vs Path: owned vs borrowed filesystem paths
// =============================================================================

use std::path::PathBuf;
use url::Url;

/// Where the Tabler icon catalog lives on the GitHub contents API
pub const DEFAULT_API_ROOT: &str =
    "https://api.github.com/repos/tabler/tabler-icons/contents/icons";

/// Cache folder, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = ".icon-cache";

// Everything a single run needs, bundled together
//
// The pipeline functions borrow this; nothing in the pipeline mutates it
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Root listing endpoint of the remote catalog
    pub api_root: Url,
    /// Local directory all icon files are written into
    pub cache_dir: PathBuf,
}

impl FetchConfig {
    /// Builds the listing URL for one style group
    ///
    /// Plain string join, tolerant of a trailing slash on the root.
    /// We deliberately avoid Url::join() here - it would swallow the last
    /// path segment of a root without a trailing slash.
    pub fn group_listing_url(&self, group: &str) -> String {
        format!("{}/{}", self.api_root.as_str().trim_end_matches('/'), group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_root(root: &str) -> FetchConfig {
        FetchConfig {
            api_root: Url::parse(root).unwrap(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }

    #[test]
    fn test_group_listing_url() {
        let config = config_with_root("https://api.github.com/repos/t/t/contents/icons");
        assert_eq!(
            config.group_listing_url("outline"),
            "https://api.github.com/repos/t/t/contents/icons/outline"
        );
    }

    #[test]
    fn test_group_listing_url_trailing_slash() {
        let config = config_with_root("https://api.github.com/repos/t/t/contents/icons/");
        assert_eq!(
            config.group_listing_url("filled"),
            "https://api.github.com/repos/t/t/contents/icons/filled"
        );
    }
}
