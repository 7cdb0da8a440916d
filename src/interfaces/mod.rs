// ============================================================================
// Interfaces Module
// Contains the contract between a field and its host form
// ============================================================================

mod change_handler;

pub use change_handler::{
    ChangeHandler, LoggingChangeHandler, NoOpChangeHandler, RecordingChangeHandler,
};
