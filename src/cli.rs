// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// icon-fetch does exactly one thing, so there are no subcommands - just
// two optional flags to override the built-in defaults.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::config::{DEFAULT_API_ROOT, DEFAULT_CACHE_DIR};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "icon-fetch",
    version = "0.1.0",
    about = "A CLI tool to fetch and cache Tabler icon SVGs from GitHub",
    long_about = "icon-fetch lists the Tabler icon catalog through the GitHub contents API, \
                  downloads every SVG, strips its hard-coded width/height attributes, and \
                  writes the results into a flat local cache directory."
)]
pub struct Cli {
    /// Catalog root listing endpoint (a GitHub repository-contents URL)
    ///
    /// Parsed as a Url, so an invalid address is rejected before any
    /// network request happens
    #[arg(long, default_value = DEFAULT_API_ROOT)]
    pub api_url: Url,

    /// Directory to write the cached SVG files into
    ///
    /// Created (with parents) at startup if it does not exist
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - link checkers, package managers etc. have several verbs
//    - this tool has exactly one job, so the flat form is clearer
//
// 2. How does clap parse a Url or PathBuf?
//    - Any type implementing FromStr works as a field type
//    - clap turns a parse error into a nice CLI error message for us
//
// 3. What does default_value do?
//    - The flag becomes optional; omitting it uses the given string
//    - The string still goes through the same FromStr parsing
// -----------------------------------------------------------------------------
