// ============================================================================
// Numeric Module
// Canonical amount representation and rounding
// ============================================================================
//
// This module provides:
// - CanonicalAmount: the locale-independent value exchanged with the host form
// - round_to_places: half-away-from-zero rounding to a profile's decimal count
// - canonical_from_f64: boundary conversion from host floating-point numbers
//
// Design principles:
// - Exact base-10 values (rust_decimal), never binary floats internally
// - Total functions: nothing here fails on user-controlled input

mod rounding;

pub use rounding::{canonical_from_f64, round_to_places, CanonicalAmount};
