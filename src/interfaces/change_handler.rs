// ============================================================================
// Change Handler Interface
// Defines the contract for reporting canonical amounts to the host form
// ============================================================================

use crate::numeric::CanonicalAmount;

/// Receiver of canonical amounts produced by a currency field.
///
/// Called synchronously, in dispatch order: once per accepted keystroke while
/// focused and once more on blur with the normalized value.
///
/// Any `FnMut(CanonicalAmount)` closure is a handler.
pub trait ChangeHandler {
    /// Handle a new canonical amount
    fn on_change(&mut self, amount: CanonicalAmount);
}

impl<F> ChangeHandler for F
where
    F: FnMut(CanonicalAmount),
{
    fn on_change(&mut self, amount: CanonicalAmount) {
        self(amount)
    }
}

/// No-op handler for read-only fields and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpChangeHandler;

impl ChangeHandler for NoOpChangeHandler {
    fn on_change(&mut self, _amount: CanonicalAmount) {
        // Do nothing
    }
}

/// Logging handler
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingChangeHandler;

impl ChangeHandler for LoggingChangeHandler {
    fn on_change(&mut self, amount: CanonicalAmount) {
        tracing::debug!("Currency field change: {}", amount);
    }
}

/// Handler that keeps every notified amount, oldest first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingChangeHandler {
    changes: Vec<CanonicalAmount>,
}

impl RecordingChangeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[CanonicalAmount] {
        &self.changes
    }

    pub fn last(&self) -> Option<CanonicalAmount> {
        self.changes.last().copied()
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl ChangeHandler for RecordingChangeHandler {
    fn on_change(&mut self, amount: CanonicalAmount) {
        self.changes.push(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_noop_handler() {
        let mut handler = NoOpChangeHandler;
        handler.on_change(Decimal::ONE);
        // Should not panic
    }

    #[test]
    fn test_closure_handler() {
        let mut total = Decimal::ZERO;
        {
            let mut handler = |amount: Decimal| total += amount;
            handler.on_change(Decimal::from(2));
            handler.on_change(Decimal::from(3));
        }
        assert_eq!(total, Decimal::from(5));
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let mut handler = RecordingChangeHandler::new();
        handler.on_change(Decimal::from(1));
        handler.on_change(Decimal::from(12));
        handler.on_change(Decimal::new(123, 1));

        assert_eq!(
            handler.changes(),
            &[Decimal::from(1), Decimal::from(12), Decimal::new(123, 1)]
        );
        assert_eq!(handler.last(), Some(Decimal::new(123, 1)));

        handler.clear();
        assert!(handler.changes().is_empty());
        assert_eq!(handler.last(), None);
    }
}
