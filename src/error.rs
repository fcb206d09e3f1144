//! Error types for termlayout.

use std::fmt;
use std::io;

/// Result type alias for termlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termlayout operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Codepoint outside `0..=0x10FFFF`.
    CodepointOutOfRange(u32),
    /// Window dimension error (e.g., zero width/height).
    InvalidDimensions { width: usize, height: usize },
    /// A terminal probe ran but produced no usable answer.
    ProbeFailed(String),
    /// Every fallback strategy declined or failed.
    FallbackExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CodepointOutOfRange(cp) => {
                write!(f, "codepoint {cp:#X} is outside the Unicode range")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::ProbeFailed(reason) => write!(f, "terminal probe failed: {reason}"),
            Self::FallbackExhausted => {
                write!(f, "terminal query failed: no fallback strategy succeeded")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CodepointOutOfRange(0x11_0000);
        assert!(err.to_string().contains("0x110000"));

        let err = Error::InvalidDimensions {
            width: 0,
            height: 24,
        };
        assert!(err.to_string().contains("0x24"));

        let err = Error::ProbeFailed("no reply".to_string());
        assert!(err.to_string().contains("no reply"));

        assert!(Error::FallbackExhausted.to_string().contains("no fallback"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
