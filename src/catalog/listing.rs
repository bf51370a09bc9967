// src/catalog/listing.rs
// =============================================================================
// This module queries the GitHub repository-contents API.
//
// Two call shapes, both returning a JSON array of entries:
// - Root listing: entries tagged with "type" ("dir" or "file") - the "dir"
//   entries are the style groups (outline, filled, ...)
// - Per-group listing: entries with "name" and "download_url" - the .svg
//   entries become icon descriptors
//
// The response is untrusted external data: every array element is parsed
// on its own, and a malformed element (missing or non-string name) is
// skipped instead of failing the whole listing.
//
// Failure policy: any listing failure (network, HTTP status, parse) is
// logged and turned into an empty result for that one request. One group
// failing never cancels its siblings.
//
// Rust concepts:
// - Option<T>: For fields the API may omit
// - filter_map: Parse-and-filter in one pass
// - join_all: Fan out many futures, wait for all of them
// =============================================================================

use anyhow::{anyhow, Result};
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::FetchConfig;

// Every icon file in the catalog carries this suffix
pub const SVG_SUFFIX: &str = ".svg";

// One downloadable icon, as discovered in a group listing
//
// Ephemeral: built during listing, consumed by the downloader, never
// persisted anywhere
#[derive(Debug, Clone, PartialEq)]
pub struct IconDescriptor {
    /// Remote filename with the .svg suffix stripped
    pub name: String,
    /// Direct-download address; None when the listing omitted it
    /// (the downloader then skips this icon silently)
    pub url: Option<String>,
    /// Style group (subfolder) the icon came from
    pub group: String,
    /// Repository-relative path, kept for traceability only
    pub path: String,
}

// One element of a contents-API listing response
//
// All fields are optional on purpose: the API response is external data
// and we guard against missing fields instead of assuming shape
#[derive(Debug, Deserialize)]
struct ListingEntry {
    #[serde(default)]
    name: Option<String>,
    // "type" is a Rust keyword, so the field needs a rename
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    download_url: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

// Lists the style groups at the catalog root
//
// Returns the names of entries whose kind is "dir" - plain files at the
// root (README, LICENSE, ...) are filtered out.
//
// Soft failure: on any error this logs and returns an empty Vec, and the
// pipeline simply proceeds with zero groups.
pub async fn list_groups(client: &Client, config: &FetchConfig) -> Vec<String> {
    match fetch_listing(client, config.api_root.as_str()).await {
        Ok(entries) => groups_from_entries(entries),
        Err(e) => {
            crate::log_fetch_error(&e);
            Vec::new()
        }
    }
}

// Lists the icons inside one style group
//
// Keeps only entries whose name ends in ".svg" and maps each to an
// IconDescriptor. Failures are isolated to this group: log, return empty.
pub async fn list_group_icons(
    client: &Client,
    config: &FetchConfig,
    group: &str,
) -> Vec<IconDescriptor> {
    let url = config.group_listing_url(group);

    match fetch_listing(client, &url).await {
        Ok(entries) => icons_from_entries(entries, group),
        Err(e) => {
            crate::log_fetch_error(&e);
            Vec::new()
        }
    }
}

// Fetches the whole catalog: every icon of every group
//
// The per-group listings are all launched together and awaited as one
// batch (fan-out/fan-in). join_all() returns results in input order, so
// the flattened Vec keeps each group's icons as a contiguous block in
// group order, regardless of which request finished first.
pub async fn fetch_all_icons(client: &Client, config: &FetchConfig) -> Vec<IconDescriptor> {
    let groups = list_groups(client, config).await;

    // One future per group; none of them can fail the batch because
    // list_group_icons already converts failures into empty Vecs
    let lookups = groups
        .iter()
        .map(|group| list_group_icons(client, config, group));

    let per_group = join_all(lookups).await;

    per_group.into_iter().flatten().collect()
}

// Performs one listing request and parses the response
//
// A non-2xx status is an error here - the contents API answers listing
// calls with 200 or not at all usefully.
async fn fetch_listing(client: &Client, url: &str) -> Result<Vec<ListingEntry>> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("Failed to list {}: HTTP {}", url, response.status()));
    }

    // Deserialize to raw JSON values first so one malformed element
    // cannot poison the whole array
    let values: Vec<Value> = response.json().await?;

    Ok(parse_entries(values))
}

// Parses raw JSON array elements into listing entries, dropping any
// element that does not fit (wrong type, non-string name, etc.)
fn parse_entries(values: Vec<Value>) -> Vec<ListingEntry> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

// Pure filter: root entries -> group names
fn groups_from_entries(entries: Vec<ListingEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| entry.kind.as_deref() == Some("dir"))
        .filter_map(|entry| entry.name)
        .collect()
}

// Pure mapping: group entries -> icon descriptors
//
// The descriptor name is the filename with the suffix stripped; entries
// without a usable name, or without the suffix, are dropped.
fn icons_from_entries(entries: Vec<ListingEntry>, group: &str) -> Vec<IconDescriptor> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let file_name = entry.name?;
            let name = file_name.strip_suffix(SVG_SUFFIX)?.to_string();

            // The API normally reports the path; fall back to composing
            // it so traceability survives a sparse response
            let path = entry
                .path
                .unwrap_or_else(|| format!("{}/{}", group, file_name));

            Some(IconDescriptor {
                name,
                url: entry.download_url,
                group: group.to_string(),
                path,
            })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is filter_map?
//    - Like map() and filter() combined: the closure returns Option<T>
//    - Some(value) keeps the (transformed) item, None drops it
//    - The ? operator inside works on Options too, not just Results
//
// 2. Why parse each element separately?
//    - serde_json::from_value::<Vec<ListingEntry>>() would fail the whole
//      array if ONE element had, say, a numeric name
//    - Going through Vec<Value> first lets us skip just the bad element
//
// 3. What is join_all?
//    - Takes an iterator of futures, polls them all concurrently, and
//      resolves once every one has finished
//    - Like Promise.all(), except our futures cannot reject - failures
//      were already mapped to empty Vecs
// -----------------------------------------------------------------------------
