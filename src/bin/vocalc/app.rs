//! Shared state for the calculator UI: the input machine, the screen it
//! renders into, and the utterance-capture overlay.

use std::time::{Duration, Instant};
use vocalc::config::AppConfig;
use vocalc::keypad::DisplaySink;
use vocalc::{ExprEvaluator, Keypad, Normalizer};

/// Display sink the UI reads back; every keypad operation renders here.
#[derive(Default)]
pub struct ScreenBuffer {
    text: String,
}

impl DisplaySink for ScreenBuffer {
    fn render(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl ScreenBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub struct App {
    pub config: AppConfig,
    pub keypad: Keypad,
    pub screen: ScreenBuffer,
    pub evaluator: ExprEvaluator,
    pub normalizer: Normalizer,
    /// Utterance being typed while the capture overlay is open.
    capture: Option<String>,
    status: Option<String>,
    status_clear_at: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig, normalizer: Normalizer) -> Self {
        Self {
            config,
            keypad: Keypad::new(),
            screen: ScreenBuffer::default(),
            evaluator: ExprEvaluator,
            normalizer,
            capture: None,
            status: None,
            status_clear_at: None,
        }
    }

    pub fn capturing(&self) -> bool {
        self.capture.is_some()
    }

    pub fn capture_text(&self) -> &str {
        self.capture.as_deref().unwrap_or("")
    }

    pub fn begin_capture(&mut self) {
        self.capture = Some(String::new());
    }

    /// Close the overlay without delivering anything; the machine stays
    /// untouched, like a recognizer that never calls back.
    pub fn cancel_capture(&mut self) {
        self.capture = None;
    }

    pub fn push_capture_char(&mut self, ch: char) {
        if let Some(entry) = self.capture.as_mut() {
            entry.push(ch);
        }
    }

    pub fn backspace_capture(&mut self) {
        if let Some(entry) = self.capture.as_mut() {
            entry.pop();
        }
    }

    /// Close the overlay and hand back the finished utterance, if any.
    pub fn take_capture(&mut self) -> Option<String> {
        self.capture.take().filter(|entry| !entry.trim().is_empty())
    }

    pub fn set_status(&mut self, text: impl Into<String>, clear_after: Option<Duration>) {
        self.status = Some(text.into());
        self.status_clear_at = clear_after.map(|delay| Instant::now() + delay);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Drop an expired status toast. Called once per event-loop turn.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.status_clear_at {
            if Instant::now() >= deadline {
                self.status = None;
                self.status_clear_at = None;
            }
        }
    }
}
