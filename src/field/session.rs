// ============================================================================
// Edit Session
// Per-focus-cycle editing bookkeeping
// ============================================================================

/// Ephemeral state of one focus cycle.
///
/// Opened on focus and dropped on blur. The caret is not remapped after a
/// reformat; it follows default platform placement and sits at the end of
/// the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditSession {
    /// Length in chars of the last raw event text, before sanitizing
    prior_raw_len: usize,
    /// Caret offset in chars into the buffer
    caret: usize,
    keystrokes: usize,
}

impl EditSession {
    /// Open a session over the buffer produced by focusing the field
    pub fn open(buffer: &str) -> Self {
        let len = buffer.chars().count();
        Self {
            prior_raw_len: len,
            caret: len,
            keystrokes: 0,
        }
    }

    /// Record a keystroke that turned `raw` into `buffer`
    pub fn record_keystroke(&mut self, raw: &str, buffer: &str) {
        self.prior_raw_len = raw.chars().count();
        self.caret = buffer.chars().count();
        self.keystrokes += 1;
    }

    /// Buffer rewritten without a keystroke; caret goes back to the end
    pub fn rebase(&mut self, buffer: &str) {
        let len = buffer.chars().count();
        self.prior_raw_len = len;
        self.caret = len;
    }

    pub fn prior_raw_len(&self) -> usize {
        self.prior_raw_len
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn keystrokes(&self) -> usize {
        self.keystrokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_places_caret_at_end() {
        let session = EditSession::open("1234.50");
        assert_eq!(session.caret(), 7);
        assert_eq!(session.prior_raw_len(), 7);
        assert_eq!(session.keystrokes(), 0);

        let empty = EditSession::open("");
        assert_eq!(empty.caret(), 0);
    }

    #[test]
    fn test_keystroke_moves_caret_to_end() {
        let mut session = EditSession::open("");
        session.record_keystroke("$12.345", "12.34");

        assert_eq!(session.prior_raw_len(), 7);
        assert_eq!(session.caret(), 5);
        assert_eq!(session.keystrokes(), 1);
    }

    #[test]
    fn test_rebase_keeps_keystroke_count() {
        let mut session = EditSession::open("");
        session.record_keystroke("12,", "12,");
        session.rebase("12.");

        assert_eq!(session.caret(), 3);
        assert_eq!(session.prior_raw_len(), 3);
        assert_eq!(session.keystrokes(), 1);
    }
}
