use crate::models::Language;

/// Statistical language identification.
pub trait ILanguageDetector: Send + Sync {
    /// Identify the dominant language of `text`.
    ///
    /// Pure function of the input plus static reference tables.
    /// Empty, whitespace-only, or very short input yields
    /// `Language::Unknown` rather than a low-confidence guess.
    fn detect(&self, text: &str) -> Language;
}
