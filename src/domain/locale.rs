// ============================================================================
// Locale Profiles
// Static display rules per currency
// ============================================================================

use super::currency::CurrencyCode;
use super::errors::{LocaleError, LocaleResult};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Input hint shared by every profile: digits with one optional separator.
const INPUT_PATTERN: &str = "[0-9]*[.,]?[0-9]*";

/// Formatting rules for one currency.
///
/// Immutable; obtained from the registry with [`lookup`] or
/// [`CurrencyCode::profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LocaleProfile {
    pub currency_code: CurrencyCode,
    /// Rendered as an adornment outside the editable text
    pub symbol: &'static str,
    pub decimal_places: u8,
    pub decimal_separator: char,
    pub group_separator: char,
}

// ============================================================================
// Registry
// ============================================================================

static PROFILES: [LocaleProfile; 5] = [
    LocaleProfile {
        currency_code: CurrencyCode::Usd,
        symbol: "$",
        decimal_places: 2,
        decimal_separator: '.',
        group_separator: ',',
    },
    LocaleProfile {
        currency_code: CurrencyCode::Eur,
        symbol: "€",
        decimal_places: 2,
        decimal_separator: '.',
        group_separator: ',',
    },
    LocaleProfile {
        currency_code: CurrencyCode::Chf,
        symbol: "CHF",
        decimal_places: 2,
        decimal_separator: '.',
        group_separator: '\'',
    },
    LocaleProfile {
        currency_code: CurrencyCode::Gbp,
        symbol: "£",
        decimal_places: 2,
        decimal_separator: '.',
        group_separator: ',',
    },
    LocaleProfile {
        currency_code: CurrencyCode::Brl,
        symbol: "R$",
        decimal_places: 2,
        decimal_separator: ',',
        group_separator: '.',
    },
];

/// Look up the profile for a currency code string.
///
/// # Errors
/// Returns `UnknownCurrency` if the code is outside the supported set. This
/// is a configuration error and should be treated as fatal by the caller.
pub fn lookup(currency_code: &str) -> LocaleResult<&'static LocaleProfile> {
    currency_code
        .parse::<CurrencyCode>()
        .map(LocaleProfile::for_currency)
}

impl LocaleProfile {
    /// Infallible lookup for an already-typed currency code.
    pub fn for_currency(currency: CurrencyCode) -> &'static LocaleProfile {
        match currency {
            CurrencyCode::Usd => &PROFILES[0],
            CurrencyCode::Eur => &PROFILES[1],
            CurrencyCode::Chf => &PROFILES[2],
            CurrencyCode::Gbp => &PROFILES[3],
            CurrencyCode::Brl => &PROFILES[4],
        }
    }

    /// Every registered profile, in display order.
    pub fn all() -> &'static [LocaleProfile] {
        &PROFILES
    }

    /// Text shown in an empty field, e.g. `"0.00"` or `"0,00"`.
    pub fn placeholder(&self) -> String {
        let mut placeholder = String::from("0");
        if self.decimal_places > 0 {
            placeholder.push(self.decimal_separator);
            placeholder.extend(std::iter::repeat_n('0', usize::from(self.decimal_places)));
        }
        placeholder
    }

    pub fn input_pattern(&self) -> &'static str {
        INPUT_PATTERN
    }

    pub fn input_mode(&self) -> &'static str {
        "decimal"
    }

    /// Check the separator invariants.
    ///
    /// # Errors
    /// Returns `InvalidProfile` if the separators coincide or either one is a
    /// digit.
    pub fn validate(&self) -> LocaleResult<()> {
        if self.decimal_separator == self.group_separator {
            return Err(LocaleError::InvalidProfile(format!(
                "{}: decimal and group separator are both '{}'",
                self.currency_code, self.decimal_separator
            )));
        }

        if self.decimal_separator.is_ascii_digit() || self.group_separator.is_ascii_digit() {
            return Err(LocaleError::InvalidProfile(format!(
                "{}: separators cannot be digits",
                self.currency_code
            )));
        }

        Ok(())
    }
}
