// src/download/mod.rs
// =============================================================================
// This module turns icon descriptors into files on disk.
//
// Submodules:
// - fetch: downloads each icon and writes it to the cache directory
// - transform: strips the hard-coded width/height attributes
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod fetch;
mod transform;

// Re-export public items from submodules
pub use fetch::{download_all, icon_file_name, DownloadSummary};
pub use transform::strip_fixed_dimensions;
