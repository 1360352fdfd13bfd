use thiserror::Error;

/// Startup failure: the environment could not be read or held bad values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read CAREFIT__* settings: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid setting: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.port must not be 0")]
    InvalidPort,

    #[error("server.request_timeout_secs must be between 1 and 120")]
    InvalidTimeout,

    #[error("server.host `{0}` is not an IP address")]
    InvalidAddress(String),

    #[error("care_plan.generation_delay_ms must not exceed {max_ms}")]
    GenerationDelayTooLong { max_ms: u64 },

    #[error("care_plan.generation_delay_ms must be shorter than the request timeout")]
    GenerationDelayExceedsTimeout,
}
