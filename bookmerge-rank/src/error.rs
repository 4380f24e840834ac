use thiserror::Error;

/// Errors raised while building a ranker from configuration.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("invalid ranking pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

pub type RankResult<T> = Result<T, RankError>;
