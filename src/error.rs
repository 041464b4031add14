use thiserror::Error;

/// Errors raised while constructing interval and boundary values.
///
/// Tree operations never fail; malformed input is rejected before it can
/// reach a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("start ({start}) must not be later than end ({end})")]
    InvertedBounds { start: String, end: String },

    #[error("year must be between 1900 and 3000, was {0}")]
    YearOutOfRange(i32),

    #[error("not a calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
