//! # redacted-engine
//!
//! The detection-and-redaction pipeline: language identification,
//! sensitive-span extraction conditioned on the detected language, and
//! placeholder substitution over the original text.
//!
//! Redaction is lossy by design: the output keeps no positional
//! metadata and nothing can reconstruct the original spans from it.

mod extractor;
mod pipeline;
mod redactor;

pub use extractor::extract;
pub use pipeline::RedactionPipeline;
pub use redactor::redact_spans;
