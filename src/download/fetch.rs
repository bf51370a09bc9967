// src/download/fetch.rs
// =============================================================================
// This module downloads the discovered icons into the cache directory.
//
// The loop is strictly sequential on purpose: one request in flight at a
// time, each download fully awaited (fetch -> transform -> write) before
// the next one starts. The catalog has thousands of icons and hammering
// the download host with an unbounded burst is the wrong default.
//
// Failure policy mirrors the listing stage: a failure (network, HTTP
// status, filesystem) is logged with the fixed prefix and the loop moves
// on. One bad icon never aborts the batch.
//
// Rust concepts:
// - for + .await: Sequential async iteration
// - match on &Option<T>: Branching on a field that may be absent
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::catalog::IconDescriptor;
use crate::config::FetchConfig;
use crate::download::transform::strip_fixed_dimensions;

// Counts for the end-of-run report
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DownloadSummary {
    /// Icons fetched, transformed, and written successfully
    pub downloaded: usize,
    /// Icons skipped because the listing carried no download URL
    pub skipped: usize,
    /// Icons that failed (network, HTTP status, or write error)
    pub failed: usize,
}

// Downloads every icon in the sequence, one at a time, in order
//
// Never fails as a whole: per-icon errors are logged and counted, and the
// loop continues with the next descriptor.
pub async fn download_all(
    client: &Client,
    config: &FetchConfig,
    icons: &[IconDescriptor],
) -> DownloadSummary {
    let mut summary = DownloadSummary::default();

    for icon in icons {
        // No download URL means nothing to do - silently skip, this is
        // not an error and produces no log line
        let url = match &icon.url {
            Some(url) => url,
            None => {
                summary.skipped += 1;
                continue;
            }
        };

        match download_icon(client, config, icon, url).await {
            Ok(()) => {
                summary.downloaded += 1;
                println!("   ✅ Downloaded: {}-{}", icon.group, icon.name);
            }
            Err(e) => {
                summary.failed += 1;
                crate::log_fetch_error(&e);
            }
        }
    }

    summary
}

// Fetches one icon, strips its fixed dimensions, and writes it
//
// The write overwrites any existing file at the path unconditionally -
// re-running the tool refreshes the whole cache.
async fn download_icon(
    client: &Client,
    config: &FetchConfig,
    icon: &IconDescriptor,
    url: &str,
) -> Result<()> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to download {}: HTTP {}",
            url,
            response.status()
        ));
    }

    let svg = response.text().await?;
    let cleaned = strip_fixed_dimensions(&svg);

    let file_path = icon_file_path(&config.cache_dir, &icon.group, &icon.name);

    tokio::fs::write(&file_path, cleaned)
        .await
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    Ok(())
}

// Builds the on-disk filename for an icon
//
// Icon names are only unique within their group ("home" exists in both
// outline and filled), so the filename is always the composite key
// {group}-{name}.svg - never the bare name.
pub fn icon_file_name(group: &str, name: &str) -> String {
    format!("{}-{}.svg", group, name)
}

fn icon_file_path(cache_dir: &Path, group: &str, name: &str) -> PathBuf {
    cache_dir.join(icon_file_name(group, name))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is this loop not concurrent like the listing fan-out?
//    - The listing phase fires a handful of requests (one per group)
//    - This phase could fire thousands; serial is the polite default
//    - A `for` loop with .await inside gives exactly one in flight
//
// 2. What is tokio::fs::write?
//    - The async twin of std::fs::write
//    - Creates or truncates the file, writes all bytes, in one call
//
// 3. Why does download_all not return Result?
//    - Because it cannot fail: every error is absorbed per icon
//    - The summary struct is how the caller learns what happened
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer, cache_dir: &Path) -> FetchConfig {
        FetchConfig {
            api_root: Url::parse(&format!("{}/icons", server.uri())).unwrap(),
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    fn descriptor(group: &str, name: &str, url: Option<String>) -> IconDescriptor {
        IconDescriptor {
            name: name.to_string(),
            url,
            group: group.to_string(),
            path: format!("{}/{}.svg", group, name),
        }
    }

    #[test]
    fn test_icon_file_name_is_group_prefixed() {
        // Same icon name in two groups must never collide on disk
        let a = icon_file_name("outline", "home");
        let b = icon_file_name("filled", "home");

        assert_eq!(a, "outline-home.svg");
        assert_eq!(b, "filled-home.svg");
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_download_writes_stripped_file() {
        let server = MockServer::start().await;
        let cache = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/dl/home.svg"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<svg width="24" height="24" viewBox="0 0 24 24"></svg>"#,
            ))
            .mount(&server)
            .await;

        let client = Client::new();
        let config = test_config(&server, cache.path());
        let icons = vec![descriptor(
            "outline",
            "home",
            Some(format!("{}/dl/home.svg", server.uri())),
        )];

        let summary = download_all(&client, &config, &icons).await;

        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.failed, 0);

        let written = std::fs::read_to_string(cache.path().join("outline-home.svg")).unwrap();
        assert!(!written.contains(r#"width="24""#));
        assert!(!written.contains(r#"height="24""#));
        assert!(written.contains(r#"viewBox="0 0 24 24""#));
    }

    #[tokio::test]
    async fn test_missing_url_is_skipped_without_a_file() {
        let server = MockServer::start().await;
        let cache = tempfile::tempdir().unwrap();

        let client = Client::new();
        let config = test_config(&server, cache.path());
        let icons = vec![descriptor("outline", "ghost", None)];

        let summary = download_all(&client, &config, &icons).await;

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.downloaded, 0);
        assert_eq!(summary.failed, 0);
        assert!(!cache.path().join("outline-ghost.svg").exists());
    }

    #[tokio::test]
    async fn test_one_failure_leaves_neighbors_intact() {
        let server = MockServer::start().await;
        let cache = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/dl/first.svg"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"<svg width="24"></svg>"#),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dl/broken.svg"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dl/last.svg"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"<svg height="24"></svg>"#),
            )
            .mount(&server)
            .await;

        let client = Client::new();
        let config = test_config(&server, cache.path());
        let icons = vec![
            descriptor("o", "first", Some(format!("{}/dl/first.svg", server.uri()))),
            descriptor("o", "broken", Some(format!("{}/dl/broken.svg", server.uri()))),
            descriptor("o", "last", Some(format!("{}/dl/last.svg", server.uri()))),
        ];

        let summary = download_all(&client, &config, &icons).await;

        assert_eq!(summary.downloaded, 2);
        assert_eq!(summary.failed, 1);
        assert!(cache.path().join("o-first.svg").exists());
        assert!(!cache.path().join("o-broken.svg").exists());
        assert!(cache.path().join("o-last.svg").exists());
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten() {
        let server = MockServer::start().await;
        let cache = tempfile::tempdir().unwrap();

        std::fs::write(cache.path().join("o-home.svg"), "stale contents").unwrap();

        Mock::given(method("GET"))
            .and(path("/dl/home.svg"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<svg></svg>"))
            .mount(&server)
            .await;

        let client = Client::new();
        let config = test_config(&server, cache.path());
        let icons = vec![descriptor("o", "home", Some(format!("{}/dl/home.svg", server.uri())))];

        download_all(&client, &config, &icons).await;

        let written = std::fs::read_to_string(cache.path().join("o-home.svg")).unwrap();
        assert_eq!(written, "<svg></svg>");
    }

    // End-to-end through both pipeline stages: two groups, one icon each,
    // exactly two stripped files at the end
    #[tokio::test]
    async fn test_catalog_to_cache_end_to_end() {
        let server = MockServer::start().await;
        let cache = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/icons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "group1", "type": "dir" },
                { "name": "group2", "type": "dir" },
                { "name": "README.md", "type": "file" }
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/icons/group1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "name": "iconA.svg",
                    "download_url": format!("{}/dl/iconA.svg", server.uri()),
                    "path": "icons/group1/iconA.svg"
                }
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/icons/group2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "name": "iconB.svg",
                    "download_url": format!("{}/dl/iconB.svg", server.uri()),
                    "path": "icons/group2/iconB.svg"
                }
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dl/iconA.svg"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<svg width="24" height="24"><path d="M1 1"/></svg>"#,
            ))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/dl/iconB.svg"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<svg width="24" height="24"><path d="M2 2"/></svg>"#,
            ))
            .mount(&server)
            .await;

        let client = Client::new();
        let config = test_config(&server, cache.path());

        let icons = crate::catalog::fetch_all_icons(&client, &config).await;
        assert_eq!(icons.len(), 2);

        let summary = download_all(&client, &config, &icons).await;
        assert_eq!(summary.downloaded, 2);
        assert_eq!(summary.failed, 0);

        let file_count = std::fs::read_dir(cache.path()).unwrap().count();
        assert_eq!(file_count, 2);

        for file in ["group1-iconA.svg", "group2-iconB.svg"] {
            let written = std::fs::read_to_string(cache.path().join(file)).unwrap();
            assert!(!written.contains(r#"width="24""#));
            assert!(!written.contains(r#"height="24""#));
        }
    }
}
