/// Errors surfaced by the redaction service.
///
/// The per-request pipeline never fails for well-formed input; these
/// variants exist for initialization and boundary-time faults, which
/// are fatal before the service starts serving traffic.
#[derive(Debug, thiserror::Error)]
pub enum RedactedError {
    #[error("pattern '{pattern}' failed to initialize: {reason}")]
    PatternInit { pattern: String, reason: String },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

pub type RedactedResult<T> = Result<T, RedactedError>;
