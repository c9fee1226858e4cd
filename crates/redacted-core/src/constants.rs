/// Service version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder emitted for redacted numeric spans.
pub const NUMBER_PLACEHOLDER: &str = "⬛⬛⬛";

/// Placeholder emitted for redacted date spans.
pub const DATE_PLACEHOLDER: &str = "⬛⬛/⬛⬛/⬛⬛⬛⬛";

/// Placeholder emitted for redacted named-entity and generic-token spans.
pub const TOKEN_PLACEHOLDER: &str = "⬛⬛⬛⬛⬛⬛⬛⬛";

/// Minimum number of alphabetic characters before language detection
/// is attempted. Shorter samples return `Language::Unknown`.
pub const MIN_SAMPLE_CHARS: usize = 20;

/// Minimum byte length for any span admitted during overlap
/// resolution, trimmed remainders included. Shorter spans are dropped.
pub const MIN_SPAN_LEN: usize = 2;
