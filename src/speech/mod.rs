//! Speech-to-expression normalization. Transcripts are free-form sentences;
//! this is a best-effort lexical rewrite over ordered rule tables, not a
//! grammar parser. Unanticipated phrasings pass through and fail later at
//! evaluation, which is the intended safety net.

mod custom;
mod intent;
mod rules;
#[cfg(test)]
mod tests;

pub use custom::{CustomRules, Rule};
pub use intent::{detect_open_intent, OpenTarget};

use regex::Regex;
use std::sync::OnceLock;

/// Applies the substitution stages in order: user rules, operator words,
/// trig phrases, equal words, then whitespace removal.
///
/// Rule order is load-bearing. Trig phrases contain the equal words, so they
/// must be rewritten before `equals`/`equal` become `=`; `equals` must be
/// tried before its prefix `equal`.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    custom: CustomRules,
}

impl Normalizer {
    /// Built-in rules only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in rules extended with a user rule file, applied first.
    pub fn with_custom(custom: CustomRules) -> Self {
        Self { custom }
    }

    /// Rewrite a raw transcript into an expression string (or text that will
    /// fail evaluation, which the caller surfaces as an error).
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = sanitize(raw);
        for rule in self.custom.iter() {
            text = text.replace(rule.pattern.as_str(), &rule.replacement);
        }
        for (pattern, replacement) in rules::WORD_RULES {
            text = text.replace(pattern, replacement);
        }
        for (pattern, replacement) in rules::TRIG_RULES {
            text = text.replace(pattern, replacement);
        }
        for (pattern, replacement) in rules::EQUAL_RULES {
            text = text.replace(pattern, replacement);
        }
        // Spoken operators leave their word spacing behind; the expression
        // string carries none.
        text.split_whitespace().collect()
    }

    /// Active substitution rules in application order, for `--list-rules`.
    pub fn rules(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .custom
            .iter()
            .map(|rule| (rule.pattern.clone(), rule.replacement.clone()))
            .collect();
        out.extend(
            rules::WORD_RULES
                .iter()
                .chain(rules::TRIG_RULES)
                .chain(rules::EQUAL_RULES)
                .map(|(pattern, replacement)| (pattern.to_string(), replacement.to_string())),
        );
        out
    }
}

/// Strip recognizer noise markers such as `[BLANK_AUDIO]` or `(noise)` and
/// collapse whitespace runs, so they never reach the rule tables.
pub fn sanitize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    static NON_SPEECH_RE: OnceLock<Regex> = OnceLock::new();
    let re = NON_SPEECH_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\[\s*\]|\(\s*\)|\[\s*(?:silence|noise|inaudible|blank_audio|blank audio|music|laughter)\s*\]|\(\s*(?:silence|noise|inaudible|blank audio|music|laughter)\s*\)",
        )
        .expect("non-speech regex should compile")
    });
    let without_markers = re.replace_all(trimmed, " ");
    without_markers
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
