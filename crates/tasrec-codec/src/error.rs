//! Error types for recording encode and decode.

use std::fmt;
use std::io;

/// The scalar a line was expected to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    /// Base-10 integer.
    Integer,
    /// Floating-point literal.
    Float,
    /// NUL sentinel or base-16 impulse code.
    Impulse,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Impulse => write!(f, "hex impulse"),
        }
    }
}

/// Errors that can occur while reading or writing a recording.
///
/// Every variant other than [`RecordingError::Io`] is a format error: the
/// input text does not follow the recording layout. Line numbers are
/// 1-based and name the line where decoding stopped.
#[derive(Debug)]
pub enum RecordingError {
    /// An I/O error occurred on the underlying source or sink.
    Io(io::Error),
    /// Input ended where a line was required.
    UnexpectedEof {
        /// Line number that was missing.
        line: usize,
        /// Field that line would have held.
        field: &'static str,
    },
    /// A line is present but does not parse as the expected scalar.
    InvalidScalar {
        /// Offending line number.
        line: usize,
        /// Field the line holds.
        field: &'static str,
        /// Scalar kind that was expected.
        kind: ScalarKind,
        /// The trimmed line content.
        found: String,
    },
    /// A line is not valid UTF-8.
    InvalidUtf8 {
        /// Offending line number.
        line: usize,
    },
    /// A count line holds a negative value.
    NegativeCount {
        /// Offending line number.
        line: usize,
        /// Which count it was.
        field: &'static str,
        /// The value read.
        count: i32,
    },
    /// Non-empty input follows the last declared frame.
    TrailingData {
        /// First trailing line number.
        line: usize,
    },
}

impl RecordingError {
    /// Whether this error describes malformed input rather than I/O failure.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Line number where decoding stopped, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::UnexpectedEof { line, .. }
            | Self::InvalidScalar { line, .. }
            | Self::InvalidUtf8 { line }
            | Self::NegativeCount { line, .. }
            | Self::TrailingData { line } => Some(*line),
        }
    }
}

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { line, field } => {
                write!(f, "line {line}: unexpected end of input, expected `{field}`")
            }
            Self::InvalidScalar {
                line,
                field,
                kind,
                found,
            } => write!(
                f,
                "line {line}: expected {kind} for `{field}`, found {found:?}"
            ),
            Self::InvalidUtf8 { line } => write!(f, "line {line}: invalid UTF-8"),
            Self::NegativeCount { line, field, count } => {
                write!(f, "line {line}: negative count {count} for `{field}`")
            }
            Self::TrailingData { line } => {
                write!(f, "line {line}: trailing data after last frame")
            }
        }
    }
}

impl std::error::Error for RecordingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RecordingError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_is_not_a_format_error() {
        let err = RecordingError::from(io::Error::other("disk gone"));
        assert!(!err.is_format_error());
        assert_eq!(err.line(), None);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_names_line_and_field() {
        let err = RecordingError::InvalidScalar {
            line: 12,
            field: "buttons",
            kind: ScalarKind::Integer,
            found: "abc".into(),
        };
        assert!(err.is_format_error());
        assert_eq!(err.line(), Some(12));
        assert_eq!(
            err.to_string(),
            "line 12: expected integer for `buttons`, found \"abc\""
        );
    }

    #[test]
    fn eof_display() {
        let err = RecordingError::UnexpectedEof {
            line: 6,
            field: "position",
        };
        assert_eq!(
            err.to_string(),
            "line 6: unexpected end of input, expected `position`"
        );
    }
}
