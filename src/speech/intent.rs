//! App-open voice commands. Runs on the raw transcript, independent of
//! arithmetic normalization.

/// Sites the calculator knows how to open by voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    Google,
    YouTube,
    Facebook,
}

impl OpenTarget {
    pub fn url(self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com",
            Self::YouTube => "https://www.youtube.com",
            Self::Facebook => "https://www.facebook.com",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::YouTube => "YouTube",
            Self::Facebook => "Facebook",
        }
    }
}

/// Detect an "open <site>" command. Requires the word "open"; the first
/// matching site in google/chrome, youtube, facebook order wins.
pub fn detect_open_intent(raw: &str) -> Option<OpenTarget> {
    let lower = raw.to_lowercase();
    if !lower.contains("open") {
        return None;
    }
    if lower.contains("google") || lower.contains("chrome") {
        Some(OpenTarget::Google)
    } else if lower.contains("youtube") {
        Some(OpenTarget::YouTube)
    } else if lower.contains("facebook") {
        Some(OpenTarget::Facebook)
    } else {
        None
    }
}
