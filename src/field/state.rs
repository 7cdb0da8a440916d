// ============================================================================
// Field State Machine
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Focus state of a currency field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldState {
    /// Buffer shows the display form and follows the host value
    #[default]
    Blurred,
    /// Buffer shows the typing form and ignores host updates
    Focused,
}

/// Events that drive the field state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransition {
    Focus,
    Keystroke,
    Blur,
    HostUpdate,
}

impl FieldState {
    pub fn is_focused(&self) -> bool {
        matches!(self, FieldState::Focused)
    }

    /// Whether a host value change may overwrite the buffer
    pub fn accepts_host_updates(&self) -> bool {
        matches!(self, FieldState::Blurred)
    }

    /// Next state. Every transition is total.
    pub fn transition(&self, transition: FieldTransition) -> FieldState {
        match (self, transition) {
            (_, FieldTransition::Focus) => FieldState::Focused,
            (_, FieldTransition::Blur) => FieldState::Blurred,
            (state, FieldTransition::Keystroke | FieldTransition::HostUpdate) => *state,
        }
    }
}
