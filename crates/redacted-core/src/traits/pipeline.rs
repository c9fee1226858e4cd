use crate::errors::RedactedResult;

/// The single externally callable redaction operation.
pub trait IRedactionPipeline: Send + Sync {
    /// Redact sensitive spans of `text`, returning the rewritten string.
    ///
    /// Absent or empty input produces an empty string without running
    /// detection. Never fails for well-formed input; the `Result` exists
    /// for construction-time faults surfaced through trait objects.
    fn redact(&self, text: Option<&str>) -> RedactedResult<String>;
}
