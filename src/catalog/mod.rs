// src/catalog/mod.rs
// =============================================================================
// This module talks to the remote catalog listing API.
//
// Submodules:
// - listing: queries the contents API and maps entries to icon descriptors
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod listing;

// Re-export public items from submodules
// This lets users write `catalog::fetch_all_icons()` instead of
// `catalog::listing::fetch_all_icons()`
pub use listing::{fetch_all_icons, list_group_icons, list_groups, IconDescriptor};
