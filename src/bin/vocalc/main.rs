//! Vocalc entrypoint: a single-screen calculator that takes digit/operator
//! keys or a typed utterance standing in for platform speech capture.
//!
//! One-shot modes (`--utterance`, `--list-rules`) print and exit; otherwise
//! the ratatui front-end runs until quit.

mod app;
mod launcher;
mod ui;

use anyhow::Result;
use vocalc::config::AppConfig;
use vocalc::keypad::DisplaySink;
use vocalc::telemetry::init_tracing;
use vocalc::{ExprEvaluator, Keypad, Normalizer};

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_tracing(&config);
    let normalizer = config.build_normalizer()?;

    if config.list_rules {
        for (pattern, replacement) in normalizer.rules() {
            println!("{pattern} -> {replacement}");
        }
        return Ok(());
    }

    if let Some(utterance) = config.utterance.as_deref() {
        println!("{}", run_one_shot(utterance, &normalizer));
        return Ok(());
    }

    let mut app = app::App::new(config, normalizer);
    ui::run_app(&mut app)
}

/// Feed a single utterance through the speech path and return the final
/// screen text, exactly what the interactive screen would show.
fn run_one_shot(utterance: &str, normalizer: &Normalizer) -> String {
    #[derive(Default)]
    struct LineScreen(String);

    impl DisplaySink for LineScreen {
        fn render(&mut self, text: &str) {
            self.0 = text.to_string();
        }
    }

    let mut keypad = Keypad::new();
    let mut screen = LineScreen::default();
    keypad.accept_transcript(utterance, normalizer, &mut screen, &ExprEvaluator);
    screen.0
}
