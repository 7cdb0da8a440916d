// ============================================================================
// Locale Errors
// Configuration errors raised while resolving locale profiles
// ============================================================================

use std::fmt;

use super::currency::supported_codes_string;

/// Errors raised when a currency or locale profile cannot be used.
///
/// Both variants are configuration errors: a currency code reaching the
/// field must already have been validated upstream. Malformed amount text is
/// never an error; it degrades to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocaleError {
    /// Currency code outside the supported set
    UnknownCurrency(String),
    /// Profile violates a separator invariant
    InvalidProfile(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnknownCurrency(code) => write!(
                f,
                "currency '{}' is not supported. Supported currencies: {}",
                code,
                supported_codes_string()
            ),
            LocaleError::InvalidProfile(reason) => {
                write!(f, "invalid locale profile: {}", reason)
            },
        }
    }
}

impl std::error::Error for LocaleError {}

/// Result type alias for locale lookups
pub type LocaleResult<T> = Result<T, LocaleError>;
