//! Error types for formula parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when parsing a formula
///
/// This error type is returned by [`Formula::parse()`](super::Formula::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFormulaError {
    /// The input is not a well-formed formula
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error occurred, when known
        position: Option<usize>,
    },
}

impl fmt::Display for ParseFormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFormulaError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse formula at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(f, "Failed to parse formula: {}. Input: {:?}", message, input)
                }
            }
        }
    }
}

impl std::error::Error for ParseFormulaError {}

impl From<ParseFormulaError> for io::Error {
    fn from(err: ParseFormulaError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_with_position() {
        let err = ParseFormulaError::InvalidSyntax {
            message: Arc::from("unexpected token"),
            input: Arc::from("A_F AND AND"),
            position: Some(8),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 8"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_parse_error_without_position() {
        let err = ParseFormulaError::InvalidSyntax {
            message: Arc::from("unexpected end"),
            input: Arc::from("A_F OR"),
            position: None,
        };
        let msg = err.to_string();
        assert!(!msg.contains("position"));
        assert!(msg.contains("unexpected end"));
    }

    #[test]
    fn test_parse_error_to_io_error() {
        let err = ParseFormulaError::InvalidSyntax {
            message: Arc::from("test"),
            input: Arc::from("bad input"),
            position: Some(5),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
