use redacted_core::traits::IRedactionPipeline;
use redacted_core::{RedactedError, RedactedResult};
use redacted_langid::LanguageDetector;

use crate::{extract, redact_spans};

/// The composed redaction pipeline: detect language, extract sensitive
/// spans, substitute placeholders.
///
/// Stateless per call; one value is shared read-only across all
/// concurrent requests. Construction verifies the pattern library so a
/// corrupted table fails the deployment at startup instead of silently
/// matching nothing per request.
pub struct RedactionPipeline {
    detector: LanguageDetector,
}

impl RedactionPipeline {
    pub fn new() -> RedactedResult<Self> {
        let failed = redacted_patterns::failed_patterns();
        if let Some(first) = failed.first() {
            return Err(RedactedError::PatternInit {
                pattern: (*first).to_string(),
                reason: format!("regex compilation failed ({} pattern(s) total)", failed.len()),
            });
        }
        Ok(Self {
            detector: LanguageDetector::new(),
        })
    }

    /// Redact sensitive spans of `text`.
    ///
    /// Absent or empty input short-circuits to an empty string without
    /// running detection. Never fails for well-formed input.
    pub fn redact(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };
        if text.is_empty() {
            return String::new();
        }

        let language = self.detector.detect(text);
        let spans = extract(text, language);
        redact_spans(text, &spans)
    }
}

impl IRedactionPipeline for RedactionPipeline {
    fn redact(&self, text: Option<&str>) -> RedactedResult<String> {
        Ok(RedactionPipeline::redact(self, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_input_yield_empty_output() {
        let pipeline = RedactionPipeline::new().unwrap();
        assert_eq!(pipeline.redact(None), "");
        assert_eq!(pipeline.redact(Some("")), "");
    }

    #[test]
    fn construction_succeeds_with_healthy_tables() {
        assert!(RedactionPipeline::new().is_ok());
    }
}
