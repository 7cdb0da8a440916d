// ============================================================================
// Rounding
// Fixed-point rounding of canonical amounts
// ============================================================================

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Canonical amount exchanged with the host form.
///
/// A finite base-10 value rounded to the decimal places of the active
/// locale profile. Zero doubles as "unset" (see `format_for_display`).
pub type CanonicalAmount = Decimal;

/// Round `amount` to `places` fractional digits, ties away from zero.
///
/// # Example
/// ```
/// use currency_field::numeric::round_to_places;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_places(Decimal::new(12345, 3), 2), Decimal::new(1235, 2));
/// assert_eq!(round_to_places(Decimal::new(-12345, 3), 2), Decimal::new(-1235, 2));
/// ```
#[inline]
pub fn round_to_places(amount: Decimal, places: u8) -> CanonicalAmount {
    amount.round_dp_with_strategy(u32::from(places), RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a host floating-point number into a canonical amount.
///
/// Non-finite input (NaN, infinities) and values outside the decimal range
/// collapse to zero, matching the field's "blank means unset" policy.
pub fn canonical_from_f64(value: f64, places: u8) -> CanonicalAmount {
    if !value.is_finite() {
        return Decimal::ZERO;
    }

    Decimal::from_f64(value)
        .map(|d| round_to_places(d, places))
        .unwrap_or(Decimal::ZERO)
}
