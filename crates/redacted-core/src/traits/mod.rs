mod detector;
mod pipeline;

pub use detector::ILanguageDetector;
pub use pipeline::IRedactionPipeline;
