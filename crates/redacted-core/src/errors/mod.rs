mod redacted_error;

pub use redacted_error::{RedactedError, RedactedResult};
