//! Input state machine for the calculator screen. Owns the expression buffer
//! and decides which taps are allowed next; the host only forwards events and
//! renders whatever the machine says.

use crate::eval::{format_result, Evaluator};
use crate::speech::Normalizer;
use tracing::debug;

/// Collaborator that shows the current buffer to the user.
pub trait DisplaySink {
    fn render(&mut self, text: &str);
}

/// Whether the screen is in normal editing or showing an evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Editing,
    Error,
}

/// Sub-flags tracking what the buffer tail currently allows.
///
/// `last_numeric` is true when the most recent accepted input was a digit or
/// a digit-like insertion (a transcript, an evaluation result). `last_dot` is
/// true while the current number segment already holds a decimal point; an
/// accepted operator starts a new segment and clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlags {
    pub last_numeric: bool,
    pub last_dot: bool,
}

/// The calculator input machine: buffer, entry state, and tail flags.
///
/// Invalid taps are silent no-ops; nothing here panics or returns an error.
/// Every operation, accepted or rejected, ends by rendering the buffer so
/// the display always mirrors machine state.
#[derive(Debug, Default)]
pub struct Keypad {
    buffer: String,
    state: EntryState,
    flags: InputFlags,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    /// Append a digit. Always accepted; in the error state the digit
    /// replaces the buffer and editing resumes.
    pub fn press_digit(&mut self, digit: char, display: &mut impl DisplaySink) {
        if self.state == EntryState::Error {
            self.buffer.clear();
            self.state = EntryState::Editing;
        }
        self.buffer.push(digit);
        self.flags.last_numeric = true;
        display.render(&self.buffer);
    }

    /// Append an operator. Rejected unless the buffer currently ends in a
    /// number and editing is active.
    pub fn press_operator(&mut self, op: char, display: &mut impl DisplaySink) {
        if self.flags.last_numeric && self.state == EntryState::Editing {
            self.buffer.push(op);
            self.flags.last_numeric = false;
            self.flags.last_dot = false;
        } else {
            debug!(op = %op, "operator rejected");
        }
        display.render(&self.buffer);
    }

    /// Append a decimal point. Rejected if the current segment already has
    /// one, or if the tail is not numeric.
    pub fn press_dot(&mut self, display: &mut impl DisplaySink) {
        if self.flags.last_numeric && self.state == EntryState::Editing && !self.flags.last_dot {
            self.buffer.push('.');
            self.flags.last_numeric = false;
            self.flags.last_dot = true;
        } else {
            debug!("dot rejected");
        }
        display.render(&self.buffer);
    }

    /// Reset to the initial state. Always accepted.
    pub fn clear(&mut self, display: &mut impl DisplaySink) {
        self.buffer.clear();
        self.state = EntryState::Editing;
        self.flags = InputFlags::default();
        display.render(&self.buffer);
    }

    /// Evaluate the buffer. Rejected unless the tail is numeric and editing
    /// is active. Any evaluator failure collapses to the literal "Error"
    /// text and the error state; the cause is logged, not shown.
    pub fn press_equals(&mut self, display: &mut impl DisplaySink, evaluator: &impl Evaluator) {
        if self.flags.last_numeric && self.state == EntryState::Editing {
            match evaluator.evaluate(&self.buffer) {
                Ok(value) => {
                    self.buffer = format_result(value);
                    // A result counts as a completed segment: further dots
                    // are refused until an operator starts a new one.
                    self.flags.last_dot = true;
                }
                Err(err) => {
                    debug!(error = %format!("{err:#}"), "evaluation failed");
                    self.buffer = "Error".to_string();
                    self.state = EntryState::Error;
                    self.flags.last_numeric = false;
                }
            }
        } else {
            debug!("equals rejected");
        }
        display.render(&self.buffer);
    }

    /// Accept a raw spoken transcript. In the error state the screen shows
    /// "Try Again" and editing resumes without touching the transcript.
    /// Otherwise the normalized text replaces the buffer; a `=` marker in
    /// the normalized text is stripped and triggers evaluation immediately.
    pub fn accept_transcript(
        &mut self,
        raw: &str,
        normalizer: &Normalizer,
        display: &mut impl DisplaySink,
        evaluator: &impl Evaluator,
    ) {
        if self.state == EntryState::Error {
            self.buffer = "Try Again".to_string();
            self.state = EntryState::Editing;
            self.flags.last_numeric = true;
            display.render(&self.buffer);
            return;
        }

        let normalized = normalizer.normalize(raw);
        self.flags.last_numeric = true;
        if normalized.contains('=') {
            self.buffer = normalized.replace('=', "");
            display.render(&self.buffer);
            self.press_equals(display, evaluator);
        } else {
            self.buffer = normalized;
            display.render(&self.buffer);
        }
    }
}
