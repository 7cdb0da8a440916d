// ============================================================================
// Domain Module
// Currencies, locale profiles and field configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod errors;
pub mod locale;

pub use config::{FieldConfig, FieldProps};
pub use currency::{
    is_valid_currency, supported_codes, supported_codes_string, validate_currency, CurrencyCode,
};
pub use errors::{LocaleError, LocaleResult};
pub use locale::{lookup, LocaleProfile};
