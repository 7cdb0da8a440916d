// ============================================================================
// Currency Codes
// Closed set of currencies accepted by the amount field
// ============================================================================

use super::errors::{LocaleError, LocaleResult};
use super::locale::LocaleProfile;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported currency codes (ISO 4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CurrencyCode {
    /// United States Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Swiss Franc
    Chf,
    /// Pound Sterling
    Gbp,
    /// Brazilian Real
    Brl,
}

impl CurrencyCode {
    /// Every supported currency, in display order.
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Chf,
        CurrencyCode::Gbp,
        CurrencyCode::Brl,
    ];

    /// ISO code, e.g. `"USD"`.
    pub const fn code(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Brl => "BRL",
        }
    }

    /// Full English name, e.g. `"Swiss Franc"`.
    pub const fn name(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "United States Dollar",
            CurrencyCode::Eur => "Euro",
            CurrencyCode::Chf => "Swiss Franc",
            CurrencyCode::Gbp => "Pound Sterling",
            CurrencyCode::Brl => "Brazilian Real",
        }
    }

    /// Display rules for this currency.
    pub fn profile(self) -> &'static LocaleProfile {
        LocaleProfile::for_currency(self)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = LocaleError;

    /// Parse an ISO code. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| LocaleError::UnknownCurrency(s.to_string()))
    }
}

/// ISO codes of every supported currency.
pub fn supported_codes() -> Vec<&'static str> {
    CurrencyCode::ALL.iter().map(|c| c.code()).collect()
}

/// Supported codes joined by a single space, e.g. `"USD EUR CHF GBP BRL"`.
pub fn supported_codes_string() -> String {
    supported_codes().join(" ")
}

pub fn is_valid_currency(code: &str) -> bool {
    code.parse::<CurrencyCode>().is_ok()
}

/// Validate a currency code coming from outside the engine.
///
/// # Errors
/// Returns `UnknownCurrency` if the code is not in the supported set.
pub fn validate_currency(code: &str) -> LocaleResult<()> {
    code.parse::<CurrencyCode>().map(|_| ())
}
