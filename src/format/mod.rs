// ============================================================================
// Format Module
// Conversions between canonical amounts and locale-formatted text
// ============================================================================
//
// Three pure, total functions:
// - parse_from_display: any text -> canonical amount (malformed text is 0)
// - format_for_display: canonical amount -> grouped display form
// - sanitize_typed: raw keystroke text -> ungrouped typing form

mod canonicalize;
mod display;
mod typing;

pub use canonicalize::parse_from_display;
pub use display::{format_f64_for_display, format_for_display};
pub use typing::{retype, sanitize_typed, strip_grouping};
