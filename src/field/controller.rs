// ============================================================================
// Currency Field Controller
// Coordinates focus, buffer contents and propagation to the host form
// ============================================================================

use super::session::EditSession;
use super::state::{FieldState, FieldTransition};
use crate::domain::{CurrencyCode, FieldConfig, FieldProps, LocaleProfile, LocaleResult};
use crate::format::{
    format_for_display, parse_from_display, retype, sanitize_typed, strip_grouping,
};
use crate::interfaces::{ChangeHandler, NoOpChangeHandler};
use crate::numeric::CanonicalAmount;

/// Locale-aware amount field.
///
/// While blurred the buffer holds the display form of the host value and is
/// re-rendered whenever the host value changes. While focused the buffer holds
/// the typing form and is authoritative: host updates never clobber it.
///
/// The handler is notified on every keystroke and once on blur. Every
/// transition is total; malformed text degrades to zero.
///
/// # Example
/// ```
/// use currency_field::prelude::*;
/// use rust_decimal::Decimal;
///
/// let config = FieldConfig::new(Decimal::new(12345, 1), CurrencyCode::Brl);
/// let mut field = CurrencyField::new(config, RecordingChangeHandler::new());
/// assert_eq!(field.buffer(), "1.234,50");
///
/// field.focus();
/// assert_eq!(field.buffer(), "1234,50");
///
/// field.input("1234,5");
/// field.blur();
/// assert_eq!(field.buffer(), "1.234,50");
/// assert_eq!(field.handler().changes().len(), 2);
/// ```
#[derive(Debug)]
pub struct CurrencyField<H = NoOpChangeHandler> {
    profile: &'static LocaleProfile,

    /// Last known host value (updated by the host and at propagation points)
    value: CanonicalAmount,

    state: FieldState,

    /// Text currently shown in the control
    buffer: String,

    /// Present only while focused
    session: Option<EditSession>,

    props: FieldProps,

    handler: H,
}

/// Snapshot of everything a host needs to render the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub text: &'a str,
    /// Adornment rendered before the editable text
    pub symbol: &'static str,
    /// Shown only when `text` is empty
    pub placeholder: Option<String>,
    pub focused: bool,
    pub input_pattern: &'static str,
    pub input_mode: &'static str,
    pub props: &'a FieldProps,
}

impl<H: ChangeHandler> CurrencyField<H> {
    /// Create a blurred field showing the display form of `config.value`
    pub fn new(config: FieldConfig, handler: H) -> Self {
        let profile = config.currency.profile();
        let buffer = format_for_display(config.value, profile);

        Self {
            profile,
            value: config.value,
            state: FieldState::default(),
            buffer,
            session: None,
            props: config.props,
            handler,
        }
    }

    /// Create a field from an unvalidated currency code.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not supported.
    pub fn for_code(value: CanonicalAmount, currency_code: &str, handler: H) -> LocaleResult<Self> {
        Ok(Self::new(FieldConfig::for_code(value, currency_code)?, handler))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Field gained focus: switch the buffer to the typing form.
    ///
    /// A zero value opens an empty buffer; anything else is the display form
    /// with group separators removed. The buffer always holds the typing form,
    /// so the sign of a negative host value is dropped here.
    pub fn focus(&mut self) {
        self.state = self.state.transition(FieldTransition::Focus);

        self.buffer = if self.value.is_zero() {
            String::new()
        } else {
            let display = format_for_display(self.value, self.profile);
            sanitize_typed(&strip_grouping(&display, self.profile), self.profile)
        };
        self.session = Some(EditSession::open(&self.buffer));

        tracing::trace!(currency = %self.profile.currency_code, buffer = %self.buffer, "focus");
    }

    /// Raw text from an input event.
    ///
    /// Sanitizes it into the buffer, parses the canonical amount and notifies
    /// the host immediately. Returns the propagated amount.
    pub fn input(&mut self, raw: &str) -> CanonicalAmount {
        self.state = self.state.transition(FieldTransition::Keystroke);

        self.buffer = sanitize_typed(raw, self.profile);
        if let Some(session) = self.session.as_mut() {
            session.record_keystroke(raw, &self.buffer);
        }

        let amount = parse_from_display(&self.buffer, self.profile);
        tracing::trace!(raw, buffer = %self.buffer, %amount, "keystroke");

        self.propagate(amount);
        amount
    }

    /// Field lost focus: normalize the buffer to display form and notify the
    /// host. Returns the propagated amount.
    pub fn blur(&mut self) -> CanonicalAmount {
        let amount = parse_from_display(&self.buffer, self.profile);

        self.state = self.state.transition(FieldTransition::Blur);
        self.buffer = format_for_display(amount, self.profile);
        self.session = None;

        tracing::trace!(buffer = %self.buffer, %amount, "blur");

        self.propagate(amount);
        amount
    }

    /// Host value changed.
    ///
    /// Re-renders the buffer only while blurred; during an edit the buffer is
    /// left untouched.
    pub fn set_value(&mut self, value: CanonicalAmount) {
        self.state = self.state.transition(FieldTransition::HostUpdate);
        self.value = value;

        if self.state.accepts_host_updates() {
            self.buffer = format_for_display(value, self.profile);
        } else {
            tracing::trace!(%value, "host update ignored while focused");
        }
    }

    /// Host switched currency.
    ///
    /// A blurred buffer is re-rendered with the new profile. A focused buffer
    /// keeps the user's digits; only its decimal separator is translated, so
    /// the next parse reads the same amount.
    pub fn set_currency(&mut self, currency: CurrencyCode) {
        self.state = self.state.transition(FieldTransition::HostUpdate);
        let previous = std::mem::replace(&mut self.profile, currency.profile());

        if self.state.accepts_host_updates() {
            self.buffer = format_for_display(self.value, self.profile);
        } else {
            self.buffer = retype(&self.buffer, previous, self.profile);
            if let Some(session) = self.session.as_mut() {
                session.rebase(&self.buffer);
            }
        }

        tracing::trace!(
            currency = %self.profile.currency_code,
            buffer = %self.buffer,
            "currency change"
        );
    }

    pub fn set_props(&mut self, props: FieldProps) {
        self.props = props;
    }

    fn propagate(&mut self, amount: CanonicalAmount) {
        self.value = amount;
        self.handler.on_change(amount);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    pub fn value(&self) -> CanonicalAmount {
        self.value
    }

    pub fn profile(&self) -> &'static LocaleProfile {
        self.profile
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Everything a host needs to render the control
    pub fn view(&self) -> FieldView<'_> {
        FieldView {
            text: &self.buffer,
            symbol: self.profile.symbol,
            placeholder: self
                .buffer
                .is_empty()
                .then(|| self.profile.placeholder()),
            focused: self.state.is_focused(),
            input_pattern: self.profile.input_pattern(),
            input_mode: self.profile.input_mode(),
            props: &self.props,
        }
    }
}
