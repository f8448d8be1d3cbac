//! # Protocol State Tracker
//!
//! Mutable formatting state carried across a single synthesis pass. The
//! tracker has exactly two consumers: the per-line width-limit selection
//! (double-width halves the character budget) and the end-of-document leak
//! report (a toggle left on with no matching off).
//!
//! State is owned by one pass; it is never shared across documents.

use crate::printer::PrinterProfile;
use crate::protocol::text::Alignment;
use crate::synth::scan;
use crate::tags::{self, Effect};

/// Formatting state at a point in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProtocolState {
    pub bold: bool,
    pub double_height: bool,
    pub double_width: bool,
    pub alignment: Alignment,
}

impl ProtocolState {
    /// Fresh state: everything off, left-aligned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tag effect.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Bold(on) => self.bold = on,
            Effect::DoubleHeight(on) => self.double_height = on,
            Effect::DoubleWidth(on) => self.double_width = on,
            Effect::Align(alignment) => self.alignment = alignment,
        }
    }

    /// Apply every recognized tag on a line, left to right.
    ///
    /// Unknown tags and block/data tags carry no effect and are skipped.
    pub fn apply_line(&mut self, line: &str) {
        for span in scan::scan_tags(line) {
            if let Some(effect) = tags::lookup(span.text).and_then(|spec| spec.effect) {
                self.apply(effect);
            }
        }
    }

    /// The printable character budget under the current state.
    pub fn line_limit(&self, profile: &PrinterProfile) -> usize {
        if self.double_width {
            profile.columns_double
        } else {
            profile.columns
        }
    }

    /// End-of-document leak report: one warning per toggle still on.
    ///
    /// State is boolean, not a counter, so repeated unclosed toggles still
    /// produce exactly one warning per attribute.
    pub fn leak_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (active, tag) in [
            (self.bold, "{{B_ON}}"),
            (self.double_height, "{{DH_ON}}"),
            (self.double_width, "{{DW_ON}}"),
        ] {
            if active {
                warnings.push(format!(
                    "state leak: {} still active at end of document",
                    tag
                ));
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ProtocolState::new();
        assert!(!state.bold);
        assert!(!state.double_height);
        assert!(!state.double_width);
        assert_eq!(state.alignment, Alignment::Left);
    }

    #[test]
    fn test_apply_line_toggles() {
        let mut state = ProtocolState::new();
        state.apply_line("{{B_ON}}{{DH_ON}}text{{DH_OFF}}");
        assert!(state.bold);
        assert!(!state.double_height);
    }

    #[test]
    fn test_apply_line_left_to_right() {
        let mut state = ProtocolState::new();
        // Later tags win
        state.apply_line("{{CENTER}}x{{RIGHT}}");
        assert_eq!(state.alignment, Alignment::Right);

        state.apply_line("{{B_ON}}{{B_OFF}}");
        assert!(!state.bold);
    }

    #[test]
    fn test_apply_line_ignores_unknown_and_block_tags() {
        let mut state = ProtocolState::new();
        state.apply_line("{{WAT}}{{LOGO}}{{STORE_ID}}");
        assert_eq!(state, ProtocolState::new());
    }

    #[test]
    fn test_line_limit_follows_double_width() {
        let profile = PrinterProfile::MM80;
        let mut state = ProtocolState::new();
        assert_eq!(state.line_limit(&profile), 42);

        state.apply_line("{{DW_ON}}");
        assert_eq!(state.line_limit(&profile), 21);

        state.apply_line("{{DW_OFF}}");
        assert_eq!(state.line_limit(&profile), 42);
    }

    #[test]
    fn test_leak_warnings_empty_when_clean() {
        assert!(ProtocolState::new().leak_warnings().is_empty());
    }

    #[test]
    fn test_leak_warnings_one_per_attribute() {
        let mut state = ProtocolState::new();
        // Re-enabling an already-on toggle must not double-count
        state.apply_line("{{B_ON}}{{B_ON}}{{DW_ON}}");
        let warnings = state.leak_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("{{B_ON}}"));
        assert!(warnings[1].contains("{{DW_ON}}"));
    }

    #[test]
    fn test_alignment_never_leaks() {
        let mut state = ProtocolState::new();
        state.apply_line("{{CENTER}}");
        assert!(state.leak_warnings().is_empty());
    }
}
