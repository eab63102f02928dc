use thiserror::Error;

/// Error type for lookup table construction
///
/// Out-of-range lookups are a caller contract violation, not a recoverable
/// condition: the tables index their backing storage directly and fail fast
/// by panicking rather than wrapping or reading out of bounds.
#[derive(Debug, Error, PartialEq)]
pub enum LutError {
    /// A window width of 1 makes the VOI formula divide by `width - 1 == 0`
    #[error("invalid window width {width} (must be greater than 1)")]
    InvalidWindowWidth { width: f64 },
}
