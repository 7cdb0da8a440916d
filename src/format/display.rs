// ============================================================================
// Formatter
// Canonical amount -> grouped, zero-padded display text
// ============================================================================

use crate::domain::LocaleProfile;
use crate::numeric::{round_to_places, CanonicalAmount};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Render a canonical amount in display form.
///
/// Zero renders as the empty string so a blank field reads as "unset". Any
/// other amount is rounded to the profile's decimal places, grouped every
/// three integer digits and padded to exactly `decimal_places` fractional
/// digits. The currency symbol is not part of the text.
///
/// # Example
/// ```
/// use currency_field::domain::CurrencyCode;
/// use currency_field::format::format_for_display;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(12345, 1); // 1234.5
/// assert_eq!(format_for_display(amount, CurrencyCode::Usd.profile()), "1,234.50");
/// assert_eq!(format_for_display(amount, CurrencyCode::Brl.profile()), "1.234,50");
/// assert_eq!(format_for_display(amount, CurrencyCode::Chf.profile()), "1'234.50");
/// assert_eq!(format_for_display(Decimal::ZERO, CurrencyCode::Usd.profile()), "");
/// ```
pub fn format_for_display(amount: CanonicalAmount, profile: &LocaleProfile) -> String {
    if amount.is_zero() {
        return String::new();
    }

    let places = profile.decimal_places;
    let mut rounded = round_to_places(amount, places);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.rescale(u32::from(places));

    let digits = rounded.abs().to_string();
    let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + int_digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, int_digits, profile.group_separator);

    if places > 0 {
        let places = usize::from(places);
        out.push(profile.decimal_separator);
        out.extend(frac_digits.chars().take(places));
        out.extend(std::iter::repeat_n('0', places.saturating_sub(frac_digits.len())));
    }

    out
}

/// Render a host floating-point number in display form.
///
/// NaN, infinities and zero render as the empty string.
pub fn format_f64_for_display(value: f64, profile: &LocaleProfile) -> String {
    if !value.is_finite() || value == 0.0 {
        return String::new();
    }

    Decimal::from_f64(value)
        .map(|amount| format_for_display(amount, profile))
        .unwrap_or_default()
}

/// Append ASCII `digits`, inserting `separator` every three digits from the right.
fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}
