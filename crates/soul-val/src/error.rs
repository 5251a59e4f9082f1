//! Error types for the Soul runtime values
//!
//! Only failures caused by external input are reported as errors here.
//! Misuse of the array API (bad slice bounds, bad indices) panics instead.

use miette::Diagnostic;
use thiserror::Error;

/// Alias for Result type with Soul runtime errors
pub type SoulResult<T> = std::result::Result<T, SoulError>;

/// Top-level error type of the runtime
#[derive(Error, Diagnostic, Debug)]
pub enum SoulError {
    /// Malformed numeric text
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Invalid runtime configuration
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    /// Console read/write failures
    #[error(transparent)]
    #[diagnostic(code(soul_io_E0301))]
    Io(#[from] std::io::Error),
}

/// What went wrong while converting text to a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The text does not start with a number of the target type
    InvalidArgument,
    /// The number does not fit into the target type
    OutOfRange,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ParseErrorKind::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Numeric parse failure, carrying the offending text
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("cannot parse \"{text}\" as {target}: {kind}")]
#[diagnostic(
    code(soul_parse_E0101),
    help("Expected a base-10 {target} value")
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub target: &'static str,
    pub text: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, target: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            target,
            text: text.into(),
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.kind == ParseErrorKind::OutOfRange
    }
}

/// Configuration errors
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}")]
    #[diagnostic(
        code(soul_config_E0201),
        help("'{value}' is not accepted, expected one of: {expected}")
    )]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::new(ParseErrorKind::InvalidArgument, "i64", "abc");
        assert_eq!(err.to_string(), "cannot parse \"abc\" as i64: invalid argument");
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_soul_error_from_parse() {
        let err: SoulError = ParseError::new(ParseErrorKind::OutOfRange, "u64", "-1").into();
        assert!(matches!(err, SoulError::Parse(ref e) if e.is_out_of_range()));
        assert_eq!(err.code().map(|c| c.to_string()), Some("soul_parse_E0101".to_string()));
    }
}
