// ============================================================================
// Field Module
// Focus/blur state machine driving the amount text buffer
// ============================================================================

mod controller;
mod session;
mod state;

pub use controller::{CurrencyField, FieldView};
pub use session::EditSession;
pub use state::{FieldState, FieldTransition};
