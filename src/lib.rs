// ============================================================================
// Currency Field Library
// Locale-aware monetary text input engine
// ============================================================================

//! # Currency Field
//!
//! Converts between a canonical monetary amount and locale-formatted text,
//! and drives the editing lifecycle of an amount input control.
//!
//! ## Features
//!
//! - **Locale profiles** for USD, EUR, CHF, GBP and BRL (symbol, decimals, separators)
//! - **Total conversions**: malformed text never errors, it degrades to zero
//! - **Typing form** while focused, **display form** (grouped, zero-padded) while blurred
//! - **Synchronous change notifications** on every keystroke and on blur
//!
//! ## Example
//!
//! ```rust
//! use currency_field::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let mut field = CurrencyField::new(
//!     FieldConfig::blank(CurrencyCode::Usd).with_label("Amount"),
//!     RecordingChangeHandler::new(),
//! );
//!
//! field.focus();
//! field.input("1234.5");
//! field.blur();
//!
//! assert_eq!(field.buffer(), "1,234.50");
//! assert_eq!(field.handler().last(), Some(Decimal::new(12345, 1)));
//! ```

pub mod domain;
pub mod field;
pub mod format;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        lookup, validate_currency, CurrencyCode, FieldConfig, FieldProps, LocaleError,
        LocaleProfile,
    };
    pub use crate::field::{CurrencyField, EditSession, FieldState, FieldView};
    pub use crate::format::{format_for_display, parse_from_display, sanitize_typed};
    pub use crate::interfaces::{
        ChangeHandler, LoggingChangeHandler, NoOpChangeHandler, RecordingChangeHandler,
    };
    pub use crate::numeric::CanonicalAmount;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_edit_cycle() {
        let mut field = CurrencyField::new(
            FieldConfig::new(Decimal::new(50000, 2), CurrencyCode::Brl),
            RecordingChangeHandler::new(),
        );
        assert_eq!(field.buffer(), "500,00");

        // Edit
        field.focus();
        assert_eq!(field.buffer(), "500,00");
        field.input("1500,00");
        field.input("1500,0");
        field.input("1500,");

        // Host echoes the value back mid-edit; buffer must survive
        field.set_value(Decimal::from(1500));
        assert_eq!(field.buffer(), "1500,");

        let committed = field.blur();
        assert_eq!(committed, Decimal::from(1500));
        assert_eq!(field.buffer(), "1.500,00");
        assert_eq!(
            field.handler().changes(),
            &[
                Decimal::from(1500),
                Decimal::from(1500),
                Decimal::from(1500),
                Decimal::from(1500),
            ]
        );

        // Host clears the form
        field.set_value(Decimal::ZERO);
        assert_eq!(field.buffer(), "");
        assert_eq!(field.view().placeholder.as_deref(), Some("0,00"));
    }

    #[test]
    fn test_zero_and_garbage_are_indistinguishable() {
        let usd = CurrencyCode::Usd.profile();
        assert_eq!(parse_from_display("0", usd), parse_from_display("$$$", usd));
        assert_eq!(format_for_display(Decimal::ZERO, usd), "");
    }

    #[test]
    fn test_unknown_currency_is_configuration_error() {
        assert!(matches!(lookup("XAU"), Err(LocaleError::UnknownCurrency(_))));
        assert!(validate_currency("XAU").is_err());
    }

    fn any_profile() -> impl Strategy<Value = &'static LocaleProfile> {
        prop::sample::select(LocaleProfile::all().iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_display_round_trip(cents in 1i64..1_000_000_000_000i64, profile in any_profile()) {
            let amount = Decimal::new(cents, 2);
            let text = format_for_display(amount, profile);
            prop_assert_eq!(parse_from_display(&text, profile), amount);
        }

        #[test]
        fn prop_sanitizer_bounds(raw in "[0-9.,'a-z$ -]{0,24}", profile in any_profile()) {
            let typed = sanitize_typed(&raw, profile);
            let separators = typed.matches(profile.decimal_separator).count();
            prop_assert!(separators <= 1);
            prop_assert!(typed.chars().all(|c| c.is_ascii_digit() || c == profile.decimal_separator));

            if let Some((_, fraction)) = typed.split_once(profile.decimal_separator) {
                prop_assert!(fraction.len() <= usize::from(profile.decimal_places));
            }

            prop_assert_eq!(sanitize_typed(&typed, profile), typed.clone());
        }

        #[test]
        fn prop_blur_is_idempotent(raw in "[0-9.,]{0,16}", profile in any_profile()) {
            let mut field = CurrencyField::new(
                FieldConfig::blank(profile.currency_code),
                NoOpChangeHandler,
            );
            field.focus();
            field.input(&raw);
            let first_amount = field.blur();
            let first = field.buffer().to_string();
            let second_amount = field.blur();

            prop_assert_eq!(field.buffer(), first.as_str());
            prop_assert_eq!(first_amount, second_amount);
        }
    }
}
