// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Create the cache directory and the shared HTTP client
// 3. Fetch the icon catalog (concurrent per-group listings)
// 4. Download every icon one at a time, stripping fixed dimensions
// 5. Print a summary and exit with proper code (0 = run completed, 2 = error)
//
// Rust concepts used:
// - async/await: Because we make many network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Modules: Each pipeline stage lives in its own file
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - the configuration struct and defaults
mod catalog;       // src/catalog/ - catalog listing logic
mod download;      // src/download/ - download and transform logic

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use config::FetchConfig;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

use std::time::Duration;

// Identify ourselves to the GitHub API - it rejects requests without
// a User-Agent header
const USER_AGENT: &str = concat!("icon-fetch/", env!("CARGO_PKG_VERSION"));

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = run completed (individual fetch failures are logged, not fatal)
//   Err = unexpected setup error (bad cache dir, client build failure)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Bundle the run parameters into one plain struct that the pipeline
    // functions take by reference - no hidden state anywhere
    let config = FetchConfig {
        api_root: cli.api_url,
        cache_dir: cli.cache_dir,
    };

    // Create the cache directory (and any parents) up front so every
    // later write can assume it exists
    std::fs::create_dir_all(&config.cache_dir).with_context(|| {
        format!(
            "Failed to create cache directory {}",
            config.cache_dir.display()
        )
    })?;

    // One shared HTTP client for the whole run (connection pooling)
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))  // a hung request must not stall the run forever
        .build()
        .context("Failed to create HTTP client")?;

    println!("🔍 Fetching icon catalog from {}", config.api_root);

    // Stage 1 + 2: list the style groups, then every icon in each group
    let icons = catalog::fetch_all_icons(&client, &config).await;

    println!("📦 Total icons found: {}", icons.len());

    if icons.is_empty() {
        println!("⚠️  Nothing to download");
        return Ok(0);
    }

    println!(
        "\n⬇️  Downloading icons into {}...\n",
        config.cache_dir.display()
    );

    // Stage 3: download, strip dimensions, write - strictly one at a time
    let summary = download::download_all(&client, &config, &icons).await;

    println!("\n📊 Summary:");
    println!("   ✅ Downloaded: {}", summary.downloaded);
    println!("   ⏭️  Skipped (no download URL): {}", summary.skipped);
    println!("   ❌ Failed: {}", summary.failed);

    println!("\n✨ Icon retrieval complete!");

    // Individual failures never fail the run - re-running is the recovery path
    Ok(0)
}

// Logs a per-unit failure without aborting anything
//
// Every recoverable failure (one listing, one download, one write) goes
// through here so the output has one fixed, greppable prefix
pub fn log_fetch_error(err: &anyhow::Error) {
    eprintln!("Icon fetch error: {}", err);
}
