use serde::{Deserialize, Serialize};

/// A supported language, or `Unknown` when detection confidence is
/// too low. Codes follow ISO 639-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    De,
    Es,
    It,
    Pt,
    Unknown,
}

impl Language {
    /// The ISO 639-1 code, or `"un"` for `Unknown`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Unknown => "un",
        }
    }

    /// Parse an ISO 639-1 code; anything unrecognized maps to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::En,
            "fr" => Language::Fr,
            "de" => Language::De,
            "es" => Language::Es,
            "it" => Language::It,
            "pt" => Language::Pt,
            _ => Language::Unknown,
        }
    }

    /// All languages with a reference profile, in detection order.
    pub fn supported() -> &'static [Language] {
        &[
            Language::En,
            Language::Fr,
            Language::De,
            Language::Es,
            Language::It,
            Language::Pt,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
