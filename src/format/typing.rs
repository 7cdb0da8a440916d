// ============================================================================
// Typing Sanitizer
// Raw keystroke text -> ungrouped typing form
// ============================================================================

use crate::domain::LocaleProfile;

/// Constrain raw input text to the typing form.
///
/// The result holds ASCII digits and at most one decimal separator followed
/// by at most `decimal_places` digits. Nothing is padded, so partial input
/// such as `"12."` survives while the user is still typing.
///
/// Extra decimal separators are noise: the first one is kept and every digit
/// after it is merged into a single fractional run, which is then truncated.
///
/// # Example
/// ```
/// use currency_field::domain::CurrencyCode;
/// use currency_field::format::sanitize_typed;
///
/// assert_eq!(sanitize_typed("1,234.567", CurrencyCode::Usd.profile()), "1234.56");
/// assert_eq!(sanitize_typed("12,34,56", CurrencyCode::Brl.profile()), "12,34");
/// ```
pub fn sanitize_typed(raw: &str, profile: &LocaleProfile) -> String {
    let decimal = profile.decimal_separator;

    // Separators are compared as chars, so an apostrophe needs no escaping.
    let kept: String = raw
        .chars()
        .filter(|&c| c.is_ascii_digit() || matches!(c, '.' | ',') || c == decimal)
        .filter(|&c| c != profile.group_separator)
        .filter(|&c| c.is_ascii_digit() || c == decimal)
        .collect();

    let Some((integer, tail)) = kept.split_once(decimal) else {
        return kept;
    };

    let mut out = String::with_capacity(kept.len());
    out.push_str(integer);
    out.push(decimal);
    out.extend(
        tail.chars()
            .filter(|&c| c != decimal)
            .take(usize::from(profile.decimal_places)),
    );
    out
}

/// Carry typing-form text over to another profile.
///
/// The decimal separator of `from` becomes the one of `to`; digits are kept
/// and the fraction is truncated to the new decimal places.
pub fn retype(typed: &str, from: &LocaleProfile, to: &LocaleProfile) -> String {
    let translated: String = typed
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == from.decimal_separator)
        .map(|c| if c == from.decimal_separator { to.decimal_separator } else { c })
        .collect();
    sanitize_typed(&translated, to)
}

/// Remove group separators from display-form text.
///
/// Used when the field gains focus: `"1,234.50"` becomes `"1234.50"`.
pub fn strip_grouping(display: &str, profile: &LocaleProfile) -> String {
    display
        .chars()
        .filter(|&c| c != profile.group_separator)
        .collect()
}
