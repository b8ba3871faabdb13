use thiserror::Error;

/// Errors raised while turning user input into a seed and an iteration count.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("iteration count is not an integer: {0:?}")]
    InvalidIterations(String),

    #[error("iteration count must not be negative: {0}")]
    NegativeIterations(i64),

    #[error("random seed is not an unsigned integer: {0:?}")]
    InvalidSeed(String),

    #[error("malformed RLE: {0}")]
    Rle(String),

    #[error("failed to read pattern file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a textual iteration count, rejecting negative values.
pub fn parse_iterations(text: &str) -> Result<usize, LifeError> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|_| LifeError::InvalidIterations(text.to_string()))?;
    if value < 0 {
        return Err(LifeError::NegativeIterations(value));
    }
    usize::try_from(value).map_err(|_| LifeError::InvalidIterations(text.to_string()))
}
