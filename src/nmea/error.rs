use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentenceError {
    #[error("expected at least 6 fields, got {0}")]
    TooFewFields(usize),
    #[error("unrecognized sentence tag: {0}")]
    UnknownTag(String),
    #[error("invalid coordinate field: {0}")]
    InvalidCoordinate(String),
    #[error("coordinate out of range: {0}")]
    OutOfRange(f64),
    #[error("invalid time field: {0}")]
    InvalidTime(#[from] chrono::ParseError),
}
