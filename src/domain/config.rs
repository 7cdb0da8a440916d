// ============================================================================
// Field Configuration
// Host-supplied value, currency and presentational attributes
// ============================================================================

use super::currency::CurrencyCode;
use super::errors::LocaleResult;
use crate::numeric::CanonicalAmount;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Presentational Attributes
// ============================================================================

/// Attributes passed through to the rendered control untouched.
///
/// The engine never interprets these; "required" or "must be non-zero"
/// checks belong to the host form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldProps {
    pub label: Option<String>,
    /// Host-side validation flag
    pub error: bool,
    pub helper_text: Option<String>,
    pub disabled: bool,
}

// ============================================================================
// Field Configuration
// ============================================================================

/// Configuration for one amount field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Canonical amount currently held by the host form
    pub value: CanonicalAmount,

    /// Currency whose profile drives formatting
    pub currency: CurrencyCode,

    /// Pass-through presentational attributes
    pub props: FieldProps,
}

impl FieldConfig {
    /// Create a configuration with no presentational attributes
    pub fn new(value: CanonicalAmount, currency: CurrencyCode) -> Self {
        Self {
            value,
            currency,
            props: FieldProps::default(),
        }
    }

    /// Create a configuration from an unvalidated currency code.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not supported.
    pub fn for_code(value: CanonicalAmount, currency_code: &str) -> LocaleResult<Self> {
        Ok(Self::new(value, currency_code.parse()?))
    }

    /// Configuration for a blank field (value zero)
    pub fn blank(currency: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Builder method: Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.props.label = Some(label.into());
        self
    }

    /// Builder method: Set the error flag
    pub fn with_error(mut self, error: bool) -> Self {
        self.props.error = error;
        self
    }

    /// Builder method: Set the helper text
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.props.helper_text = Some(text.into());
        self
    }

    /// Builder method: Disable the field
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Builder method: Replace all presentational attributes
    pub fn with_props(mut self, props: FieldProps) -> Self {
        self.props = props;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocaleError;

    #[test]
    fn test_config_creation() {
        let config = FieldConfig::new(Decimal::new(12345, 2), CurrencyCode::Eur);

        assert_eq!(config.value, Decimal::new(12345, 2));
        assert_eq!(config.currency, CurrencyCode::Eur);
        assert_eq!(config.props, FieldProps::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FieldConfig::blank(CurrencyCode::Brl)
            .with_label("Valor")
            .with_helper_text("Obrigatório")
            .with_error(true)
            .with_disabled(true);

        assert_eq!(config.value, Decimal::ZERO);
        assert_eq!(config.props.label.as_deref(), Some("Valor"));
        assert_eq!(config.props.helper_text.as_deref(), Some("Obrigatório"));
        assert!(config.props.error);
        assert!(config.props.disabled);
    }

    #[test]
    fn test_for_code() {
        let config = FieldConfig::for_code(Decimal::ONE, "GBP").unwrap();
        assert_eq!(config.currency, CurrencyCode::Gbp);

        assert_eq!(
            FieldConfig::for_code(Decimal::ONE, "XYZ"),
            Err(LocaleError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json() {
        let config = FieldConfig::new(Decimal::new(1050, 2), CurrencyCode::Chf).with_label("Budget");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"CHF\""));

        let back: FieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
