// src/download/transform.rs
// =============================================================================
// The one content transformation this tool applies.
//
// Tabler ships every icon with width="24" height="24" baked into the
// <svg> tag. Stripping those lets the consumer size icons with CSS.
//
// This is a blind substring removal, NOT an SVG-aware edit: it does not
// parse the markup, and it will also strip a matching snippet from
// unrelated text (a comment, a title) if one happens to be there. Icons
// authored at a different pixel size pass through untouched - that is
// the documented behavior, not an oversight.
// =============================================================================

// The exact attribute snippets to remove
pub const STRIPPED_WIDTH: &str = "width=\"24\"";
pub const STRIPPED_HEIGHT: &str = "height=\"24\"";

// Removes every occurrence of the fixed width/height attributes
//
// Idempotent: once the patterns are gone, running it again is a no-op.
pub fn strip_fixed_dimensions(svg: &str) -> String {
    svg.replace(STRIPPED_WIDTH, "").replace(STRIPPED_HEIGHT, "")
}
