pub mod config;
pub mod eval;
pub mod keypad;
pub mod speech;
pub mod telemetry;
pub mod terminal_restore;

pub use eval::{format_result, Evaluator, ExprEvaluator};
pub use keypad::{DisplaySink, EntryState, InputFlags, Keypad};
pub use speech::{detect_open_intent, CustomRules, Normalizer, OpenTarget};
