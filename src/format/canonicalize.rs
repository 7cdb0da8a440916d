// ============================================================================
// Canonicalizer
// Locale-formatted text -> canonical amount
// ============================================================================

use crate::domain::LocaleProfile;
use crate::numeric::{round_to_places, CanonicalAmount};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert user-typed or display-form text into a canonical amount.
///
/// Steps:
/// 1. Keep only ASCII digits, the decimal separator and the group separator
/// 2. Drop every group separator
/// 3. Map the decimal separator to `.`
/// 4. Parse the longest leading `digits[.digits]` run; nothing parseable is 0
/// 5. Round to the profile's decimal places, ties away from zero
///
/// A leading minus sign is stripped along with every other symbol, so the
/// result is never negative.
///
/// # Example
/// ```
/// use currency_field::domain::CurrencyCode;
/// use currency_field::format::parse_from_display;
/// use rust_decimal::Decimal;
///
/// let usd = CurrencyCode::Usd.profile();
/// assert_eq!(parse_from_display("$1,234.56", usd), Decimal::new(123456, 2));
/// assert_eq!(parse_from_display("$$$", usd), Decimal::ZERO);
/// ```
pub fn parse_from_display(text: &str, profile: &LocaleProfile) -> CanonicalAmount {
    let normalized: String = text
        .chars()
        .filter(|&c| {
            c.is_ascii_digit() || c == profile.decimal_separator || c == profile.group_separator
        })
        .filter(|&c| c != profile.group_separator)
        .map(|c| if c == profile.decimal_separator { '.' } else { c })
        .collect();

    match parse_leading_decimal(&normalized, profile.decimal_places) {
        Some(value) => round_to_places(value, profile.decimal_places),
        None => Decimal::ZERO,
    }
}

/// Parse the leading `digits[.digits]` prefix of an ASCII string.
///
/// Returns `None` when the prefix holds no digit at all or the integer part
/// does not fit the decimal range.
fn parse_leading_decimal(s: &str, places: u8) -> Option<Decimal> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let (int_digits, rest) = s.split_at(int_len);

    let frac_digits = rest
        .strip_prefix('.')
        .map(|tail| {
            let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
            &tail[..frac_len]
        })
        .unwrap_or("");

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // Digits past places + 1 cannot change a half-away-from-zero rounding.
    let frac_digits = &frac_digits[..frac_digits.len().min(usize::from(places) + 1)];

    let int_digits = match int_digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let literal = if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{}.{}", int_digits, frac_digits)
    };

    match Decimal::from_str(&literal) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(digits = int_digits.len(), %err, "amount out of range, treating as zero");
            None
        },
    }
}
