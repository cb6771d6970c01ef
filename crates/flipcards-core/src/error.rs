//! Error types for Flip Cards

use thiserror::Error;

/// Main error type for card and grid operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlipCardError {
    /// Input text did not start with an integer
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    /// Column cap outside the accepted range
    #[error("Cards per row out of range: {value} (expected {min}..={max})")]
    CardsPerRowOutOfRange { value: i64, min: u8, max: u8 },
}

/// Result type alias using FlipCardError
pub type FlipCardResult<T> = Result<T, FlipCardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlipCardError::NotANumber("abc".to_string());
        assert_eq!(format!("{}", err), "Not a number: \"abc\"");

        let err = FlipCardError::CardsPerRowOutOfRange {
            value: 15,
            min: 1,
            max: 10,
        };
        assert_eq!(
            format!("{}", err),
            "Cards per row out of range: 15 (expected 1..=10)"
        );
    }
}
